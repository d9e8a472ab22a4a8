use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::metrics::{record_reward, ANSWERS_CONFIRMED_TOTAL, SESSIONS_TOTAL};
use crate::models::question::{GameMode, QuestionBank, QuizItem};
use crate::models::session::{
    ExitSummary, Phase, RewardReceipt, SessionRules, SessionSnapshot, Transition,
};
use crate::services::pack_builder::{build_pack, Pack, PackError, Permuter, RngPermuter};
use crate::storage::StorageError;

/// Where end-of-session rewards are credited.
#[async_trait]
pub trait RewardSink: Send + Sync {
    /// Credits `amount` and returns the new balance.
    async fn grant(&self, amount: u64) -> Result<u64, StorageError>;
}

/// Result of `advance`.
#[derive(Debug)]
pub enum Advance {
    Ignored,
    /// Moved on to the item at `index`.
    NextQuestion { index: usize },
    /// The session reached `Win` or `Lose`.
    Finished {
        phase: Phase,
        reward: u64,
        /// Present when a grant was actually dispatched to the sink.
        grant: Option<RewardHandle>,
    },
}

impl Advance {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Advance::Ignored)
    }
}

/// Pending reward credit. The phase change never waits on it; callers that care
/// about the outcome await `settled`.
#[derive(Debug)]
pub struct RewardHandle {
    amount: u64,
    state: GrantState,
}

#[derive(Debug)]
enum GrantState {
    Running(JoinHandle<RewardReceipt>),
    Done(RewardReceipt),
}

impl RewardHandle {
    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub async fn settled(self) -> RewardReceipt {
        match self.state {
            GrantState::Done(receipt) => receipt,
            GrantState::Running(task) => match task.await {
                Ok(receipt) => receipt,
                Err(e) => RewardReceipt::Failed {
                    amount: self.amount,
                    error: e.to_string(),
                },
            },
        }
    }
}

/// One play-through of a pack.
///
/// Calls that are not valid in the current phase are ignored rather than
/// reported as errors, so a presentation layer can forward taps blindly.
pub struct QuizSession<I: QuizItem, P: Permuter = RngPermuter<StdRng>> {
    id: Uuid,
    bank: Arc<QuestionBank<I>>,
    rules: SessionRules,
    permuter: P,
    rewards: Arc<dyn RewardSink>,
    pack: Option<Pack<I>>,
    phase: Phase,
    answered_count: usize,
    selected: Option<I::Choice>,
    last_outcome: Option<bool>,
    lives: u32,
    score: u32,
    reward_granted: bool,
    started_at: Option<DateTime<Utc>>,
}

impl<I: QuizItem> QuizSession<I> {
    pub fn new(bank: Arc<QuestionBank<I>>, rewards: Arc<dyn RewardSink>) -> Self {
        Self::with_permuter(bank, SessionRules::default(), RngPermuter::default(), rewards)
    }
}

impl<I: QuizItem, P: Permuter> QuizSession<I, P> {
    pub fn with_permuter(
        bank: Arc<QuestionBank<I>>,
        rules: SessionRules,
        permuter: P,
        rewards: Arc<dyn RewardSink>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            bank,
            rules,
            permuter,
            rewards,
            pack: None,
            phase: Phase::Intro,
            answered_count: 0,
            selected: None,
            last_outcome: None,
            lives: rules.starting_lives,
            score: 0,
            reward_granted: false,
            started_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn mode(&self) -> GameMode {
        I::MODE
    }

    pub fn rules(&self) -> &SessionRules {
        &self.rules
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn answered_count(&self) -> usize {
        self.answered_count
    }

    pub fn selected(&self) -> Option<I::Choice> {
        self.selected
    }

    pub fn last_outcome(&self) -> Option<bool> {
        self.last_outcome
    }

    pub fn reward_granted(&self) -> bool {
        self.reward_granted
    }

    pub fn pack(&self) -> Option<&Pack<I>> {
        self.pack.as_ref()
    }

    /// The item being asked, while in `Question` or `Feedback`.
    pub fn current_item(&self) -> Option<&I> {
        match self.phase {
            Phase::Question | Phase::Feedback => self.pack.as_ref()?.get(self.answered_count),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot<I::Choice> {
        SessionSnapshot {
            session_id: self.id.to_string(),
            mode: I::MODE,
            phase: self.phase,
            answered_count: self.answered_count,
            pack_size: self.rules.pack_size,
            lives: self.lives,
            score: self.score,
            selected: self.selected,
            last_outcome: self.last_outcome,
            reward_granted: self.reward_granted,
            started_at: self.started_at,
        }
    }

    /// Leaves the intro screen with a fresh pack.
    pub fn start(&mut self) -> Result<Transition, PackError> {
        if self.phase != Phase::Intro {
            return Ok(self.ignored("start"));
        }
        self.begin("started")
    }

    /// Plays again from `Win` or `Lose`, skipping the intro.
    pub fn restart(&mut self) -> Result<Transition, PackError> {
        if !self.phase.is_terminal() {
            return Ok(self.ignored("restart"));
        }
        self.begin("restarted")
    }

    pub fn select(&mut self, choice: I::Choice) -> Transition {
        if self.phase != Phase::Question {
            return self.ignored("select");
        }
        let accepted = self
            .current_item()
            .is_some_and(|item| item.accepts(&choice));
        if !accepted {
            return self.ignored("select");
        }
        self.selected = Some(choice);
        Transition::Applied(Phase::Question)
    }

    pub fn confirm(&mut self) -> Transition {
        if self.phase != Phase::Question {
            return self.ignored("confirm");
        }
        let (Some(choice), Some(item)) = (self.selected, self.current_item()) else {
            return self.ignored("confirm");
        };

        let ok = item.is_correct(&choice);
        ANSWERS_CONFIRMED_TOTAL
            .with_label_values(&[I::MODE.as_str(), if ok { "true" } else { "false" }])
            .inc();
        tracing::debug!(
            "Session {}: item {} answered {:?}, correct={}",
            self.id,
            item.id(),
            choice,
            ok
        );

        self.last_outcome = Some(ok);
        self.phase = Phase::Feedback;
        Transition::Applied(Phase::Feedback)
    }

    pub fn advance(&mut self) -> Advance {
        if self.phase != Phase::Feedback {
            self.ignored("advance");
            return Advance::Ignored;
        }
        let Some(ok) = self.last_outcome.take() else {
            self.ignored("advance");
            return Advance::Ignored;
        };

        if ok {
            self.score += 1;
        } else {
            self.lives = self.lives.saturating_sub(1);
        }
        self.selected = None;

        // Life exhaustion wins the tie against pack completion.
        if self.lives == 0 {
            return self.finish(Phase::Lose, self.rules.lose_reward(self.score));
        }
        if self.answered_count + 1 >= self.rules.pack_size {
            return self.finish(Phase::Win, self.rules.win_reward(self.score));
        }

        self.answered_count += 1;
        self.phase = Phase::Question;
        Advance::NextQuestion {
            index: self.answered_count,
        }
    }

    /// Returns to the menu. Nothing is credited for an unfinished session.
    pub fn exit(self) -> ExitSummary {
        let abandoned = matches!(self.phase, Phase::Question | Phase::Feedback);
        if abandoned {
            SESSIONS_TOTAL
                .with_label_values(&[I::MODE.as_str(), "abandoned"])
                .inc();
            tracing::info!(
                "Session {} abandoned after {} items with score {}",
                self.id,
                self.answered_count,
                self.score
            );
        }

        ExitSummary {
            session_id: self.id.to_string(),
            mode: I::MODE,
            phase: self.phase,
            score: self.score,
            abandoned,
        }
    }

    fn begin(&mut self, status: &str) -> Result<Transition, PackError> {
        self.rules.validate()?;
        let pack = build_pack(self.bank.items(), self.rules.pack_size, &mut self.permuter)?;

        self.pack = Some(pack);
        self.lives = self.rules.starting_lives;
        self.score = 0;
        self.answered_count = 0;
        self.selected = None;
        self.last_outcome = None;
        self.reward_granted = false;
        self.started_at = Some(Utc::now());
        self.phase = Phase::Question;

        SESSIONS_TOTAL
            .with_label_values(&[I::MODE.as_str(), status])
            .inc();
        tracing::info!("Session {} {} in {} mode", self.id, status, I::MODE.as_str());

        Ok(Transition::Applied(Phase::Question))
    }

    fn finish(&mut self, phase: Phase, reward: u64) -> Advance {
        self.phase = phase;

        let status = if phase == Phase::Win { "won" } else { "lost" };
        SESSIONS_TOTAL
            .with_label_values(&[I::MODE.as_str(), status])
            .inc();
        tracing::info!(
            "Session {} {} with score {}, lives {}, reward {}",
            self.id,
            status,
            self.score,
            self.lives,
            reward
        );

        let grant = self.grant_reward_once(reward);
        Advance::Finished {
            phase,
            reward,
            grant,
        }
    }

    /// Dispatches the reward without waiting for it. The flag is raised before
    /// dispatch, so repeated calls for the same play-through credit nothing.
    fn grant_reward_once(&mut self, amount: u64) -> Option<RewardHandle> {
        if self.reward_granted {
            tracing::debug!("Session {}: reward already granted", self.id);
            return None;
        }
        self.reward_granted = true;

        if amount == 0 {
            record_reward("skipped", 0);
            return None;
        }

        let session_id = self.id;
        let rewards = Arc::clone(&self.rewards);
        let grant = async move {
            match rewards.grant(amount).await {
                Ok(balance) => {
                    record_reward("credited", amount);
                    tracing::info!(
                        "Session {}: credited {} coins, balance {}",
                        session_id,
                        amount,
                        balance
                    );
                    RewardReceipt::Credited {
                        amount,
                        balance,
                        granted_at: Utc::now(),
                    }
                }
                Err(e) => {
                    record_reward("failed", 0);
                    tracing::warn!(
                        "Session {}: reward of {} coins lost: {}",
                        session_id,
                        amount,
                        e
                    );
                    RewardReceipt::Failed {
                        amount,
                        error: e.to_string(),
                    }
                }
            }
        };

        let state = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => GrantState::Running(runtime.spawn(grant)),
            Err(e) => {
                record_reward("failed", 0);
                tracing::warn!(
                    "Session {}: no async runtime to credit {} coins: {}",
                    session_id,
                    amount,
                    e
                );
                GrantState::Done(RewardReceipt::Failed {
                    amount,
                    error: e.to_string(),
                })
            }
        };

        Some(RewardHandle { amount, state })
    }

    fn ignored(&self, operation: &str) -> Transition {
        tracing::debug!(
            "Session {}: {} ignored in phase {}",
            self.id,
            operation,
            self.phase.as_str()
        );
        Transition::Ignored
    }
}
