/// Unlockable short stories: `(id, title, text)`.
pub(crate) const NOVELS: &[(u32, &str, &str)] = &[
    (
        1,
        "The Rival of Olympus",
        r#"The old gods rarely watched the world anymore, but when they did, it was never out of boredom. High above the clouds, among cracked marble columns and silent temples, a solitary figure stood. His golden armor still reflected the sky, though its shine had softened with centuries of neglect.
There was a time when rivalry among the gods defined the order of existence. Thunder answered pride, and strength was measured by who could shake the earth the hardest. Back then, belief flowed naturally — mortals feared the sky and prayed without being asked.
Now the world below glowed with its own constellations. Cities burned with light, machines replaced miracles, and faith had found quieter forms. Watching this, the god felt something unfamiliar — not anger, but doubt.
Was power still power if no one feared it? Could a god exist without worship, without stories whispered in the dark?
A storm gathered behind him, born not from command, but unrest. Clouds twisted, lightning waiting for purpose. Perhaps the rivalry was no longer against other gods, but against time itself.
With a final glance at Olympus, he stepped forward. Not to reclaim dominance — but to redefine what divinity meant."#,
    ),
    (
        2,
        "The Ledger of Fortune",
        r#"The book was heavier than it appeared, its worn leather cover marked by countless hands. It had no title on its spine, as if it refused to be defined. Wealth, the old man believed, had never been about gold alone.
He had crossed deserts and cities chasing rumors of the book. Some said it revealed hidden treasure. Others claimed it ruined those who read it. The truth, as always, lived somewhere in between.
Opening it felt like opening memory itself. The pages revealed moments from his life — choices made in haste, risks taken for pride, opportunities ignored out of fear. The book did not judge. It simply reflected.
With each page, he felt lighter and heavier at once. Lighter from understanding, heavier from realization. Wealth had followed him, but so had consequence.
When he finally closed the book, its weight remained — not in his hands, but in his thoughts.
True fortune, he realized, was knowing the cost of what one desired."#,
    ),
    (
        3,
        "The Captain’s Last Song",
        r#"The sea had taken many things from the captain — ships, crew, years — but never his voice. Each morning, he sang to the horizon, as if the waves still remembered him. His parrot listened in quiet loyalty.
Once, his flag ruled the open waters. His name traveled faster than the wind, carried by fear and admiration alike. Gold filled the hold, and danger followed every sail.
Now the sea felt calmer, older. The world had moved on, leaving legends behind. A folded map rested in his coat, its ink fading, its promise uncertain.
He understood then that treasure was never the destination. It was the journey — the storms survived, the choices made, the songs sung under unfamiliar stars.
As the sun dipped low, he sang one last time. Not for gold. Not for glory. But for freedom.
The tide carried the melody away, and with it, a life well lived."#,
    ),
    (
        4,
        "The Second Fortune",
        r#"She never searched for the second book. It found her when ambition had finally grown quiet. Unlike the first, it felt lighter — almost patient, as if waiting for the right moment.
Its pages spoke not of gain, but of balance. Of knowing when to push forward and when to step back. Each chapter asked questions rather than offering answers.
As she read, she recognized herself — not just in success, but in excess. Not just in failure, but in resilience. The book revealed patterns she had never noticed before.
For the first time, wealth felt less like accumulation and more like alignment. Between effort and rest. Between desire and restraint.
Closing the book felt like setting something down. Something unnecessary.
The second fortune, she realized, was clarity — and peace."#,
    ),
    (
        5,
        "The Mustang’s Path",
        r#"The plains stretched endlessly, offering neither shelter nor promise. Dust rose with every step, clinging to boots and memories alike. He moved forward because standing still had become heavier than the road itself.
Gold had ruined men he once trusted. He had seen friendships fracture, names forgotten, loyalties traded for a handful of shining metal. Still, rumors of opportunity followed him like distant thunder.
The land tested patience more than courage. It rewarded those who listened, who waited, who learned when not to rush. Those who chased too fiercely were swallowed without ceremony.
At night, the stars offered no guidance. Only silence and the quiet question of choice. Why continue when the end was never certain?
He realized then that the pursuit was never about gold. It was about endurance. About proving that the past did not decide the future.
And so he walked on, steady and unbroken, letting the road shape him rather than consume him."#,
    ),
    (
        6,
        "Fire and Strings",
        r#"The musician played as if fire itself flowed through his fingers. Each note carried heat, movement, and a challenge to listen closely. People gathered before they understood why.
Spice and rhythm followed the same law. Too little faded into nothing. Too much overwhelmed. Mastery lived in balance, and he danced along that edge effortlessly.
Stories followed him wherever he went. Of kitchens turned battlegrounds. Of flavors that demanded courage and rewarded patience. Music, like heat, revealed character.
When he played, time slowed. The air thickened with anticipation, each chord building something unseen but undeniable.
As the final note faded, warmth remained — not burning, but alive. Lingering in memory rather than on the tongue.
Some performances entertained. Others transformed. This one did both."#,
    ),
    (
        7,
        "The Forest That Smiled Back",
        r#"The forest glowed softly, its light filtering through leaves like a held breath. Paths shifted subtly, guiding rather than obstructing. Nothing here felt accidental.
Luck, she sensed, was not random within these woods. It responded. To patience. To awareness. To respect. The forest listened more than it spoke.
She followed no map. Time loosened its grip, measured instead by footsteps and intuition. Each turn felt earned rather than chosen.
At the heart of the forest, she found no treasure chest, no sudden reward. Only clarity.
Luck, she realized, was never about surprise. It was about recognition — seeing opportunity when it appeared.
And as she turned back, the forest seemed quietly satisfied."#,
    ),
    (
        8,
        "The Gentle Guardian",
        r#"The panda watched the valley without urgency. Strength rested beneath stillness, quiet and certain. He had no need to prove it.
Travelers spoke in hushed tones of strange fortune near his domain. Lost trails reappeared. Storms softened without warning. Missteps became lessons instead of endings.
The guardian never intervened loudly. His presence adjusted the balance rather than disrupted it.
In a world driven by force, he embodied restraint. In a land shaped by motion, he mastered stillness.
Luck followed him not as a gift, but as a consequence.
Peace, it seemed, had its own power."#,
    ),
    (
        9,
        "The Northern Oath",
        r#"Battle had shaped his body, but duty shaped his spirit. The north demanded endurance, not glory. Survival came before celebration.
Honor guided every decision. Each action carried weight, not because of reward, but because it would be remembered.
As winter closed in, preparation replaced ambition. Strength alone would not endure the cold — purpose would.
He thought often of legacy. Not of how many battles were won, but of which values remained when strength faded.
Steel would dull. Blood would freeze. Stories, however, would travel.
And so he stood firm, bound not by fear, but by oath."#,
    ),
    (
        10,
        "The Run That Mattered",
        r#"The donkey ran despite the laughter that followed him. Not to escape, but to prove something unseen. Mostly to himself.
Obstacles appeared quickly. Some tripped him. Some slowed him. Each fall carried embarrassment — and instruction.
He learned when to push, and when to pause. When stubbornness helped, and when it hindered. Progress became less about speed and more about persistence.
The world did not change its pace for him. He adapted instead.
When he finally stopped, breathless and smiling, the run felt complete. Not because he had won.
But because he had continued."#,
    ),
];
