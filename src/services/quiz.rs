//! Step-by-step quiz that collects [`QuizAnswers`].
//!
//! Single-choice steps advance on their own after a short delay so the
//! selection stays visible. The sequencer never sleeps: `select` hands back a
//! [`PendingAdvance`] token, the view fires it when its timer elapses, and
//! tokens made stale by a later interaction are ignored.

use crate::services::scoring::QuizAnswers;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Single,
    Multi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepId {
    Product,
    Level,
    Tech,
    Priority,
}

#[derive(Debug, Serialize)]
pub struct Step {
    pub id: StepId,
    pub title: &'static str,
    pub kind: StepKind,
    pub options: &'static [&'static str],
}

pub const STEPS: &[Step] = &[
    Step {
        id: StepId::Product,
        title: "What are you building?",
        kind: StepKind::Single,
        options: &[
            "Web App",
            "Mobile App",
            "Backend",
            "Full Stack Application",
            "AI",
            "CI/CD",
        ],
    },
    Step {
        id: StepId::Level,
        title: "Your experience level?",
        kind: StepKind::Single,
        options: &["Beginner", "Intermediate", "Advanced"],
    },
    Step {
        id: StepId::Tech,
        title: "Tech needs (select all that apply)",
        kind: StepKind::Multi,
        options: &[
            "React / Next.js",
            "Node.js",
            "Javascript",
            "Python",
            "Java",
            "AI",
            "Authentication",
            "Database",
            "CI/CD",
        ],
    },
    Step {
        id: StepId::Priority,
        title: "Top priority?",
        kind: StepKind::Single,
        options: &[
            "Fast Setup",
            "Best Practices",
            "Scalability",
            "Learning Friendly",
        ],
    },
];

pub const DEFAULT_AUTO_ADVANCE_MS: u64 = 200;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum QuizError {
    #[error("quiz already finished")]
    Finished,
    #[error("quiz was cancelled")]
    Cancelled,
    #[error("`{value}` is not an option for step {step:?}")]
    UnknownOption { step: StepId, value: String },
    #[error("step {0:?} needs an answer first")]
    Unanswered(StepId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Step(usize),
    Complete,
    Cancelled,
}

/// Timer token for an auto-advance. Only the most recent token for the
/// current step advances the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    step: usize,
    generation: u64,
}

#[derive(Debug)]
pub struct QuizSequencer {
    phase: Phase,
    answers: QuizAnswers,
    generation: u64,
}

impl Default for QuizSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSequencer {
    pub fn new() -> Self {
        Self {
            phase: Phase::Step(0),
            answers: QuizAnswers::default(),
            generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    pub fn current(&self) -> Option<&'static Step> {
        match self.phase {
            Phase::Step(i) => STEPS.get(i),
            _ => None,
        }
    }

    pub fn progress_percent(&self) -> u32 {
        let step = match self.phase {
            Phase::Step(i) => i,
            Phase::Complete => STEPS.len(),
            Phase::Cancelled => 0,
        };
        ((step as f64 / STEPS.len() as f64) * 100.0).round() as u32
    }

    fn active_step(&self) -> Result<usize, QuizError> {
        match self.phase {
            Phase::Step(i) => Ok(i),
            Phase::Complete => Err(QuizError::Finished),
            Phase::Cancelled => Err(QuizError::Cancelled),
        }
    }

    /// Record `value` for the current step. Single-choice steps return a
    /// token to fire after the auto-advance delay; multi-choice steps toggle
    /// the value and wait for [`QuizSequencer::next`].
    pub fn select(&mut self, value: &str) -> Result<Option<PendingAdvance>, QuizError> {
        let i = self.active_step()?;
        let step = &STEPS[i];
        let Some(option) = step.options.iter().find(|o| **o == value) else {
            return Err(QuizError::UnknownOption {
                step: step.id,
                value: value.to_string(),
            });
        };
        let option = option.to_string();

        let slot = match step.id {
            StepId::Product => Some(&mut self.answers.product),
            StepId::Level => Some(&mut self.answers.level),
            StepId::Priority => Some(&mut self.answers.priority),
            StepId::Tech => None,
        };
        match slot {
            Some(slot) => {
                *slot = Some(option);
                self.generation += 1;
                Ok(Some(PendingAdvance {
                    step: i,
                    generation: self.generation,
                }))
            }
            None => {
                if let Some(pos) = self.answers.tech.iter().position(|t| *t == option) {
                    self.answers.tech.remove(pos);
                } else {
                    self.answers.tech.push(option);
                }
                Ok(None)
            }
        }
    }

    /// Timer callback for a single-choice selection. Returns the final
    /// answers if this advance completed the quiz.
    pub fn fire(&mut self, pending: PendingAdvance) -> Option<QuizAnswers> {
        let current = match self.phase {
            Phase::Step(i) => i,
            _ => return None,
        };
        if pending.step != current || pending.generation != self.generation {
            log::debug!("ignoring stale auto-advance for step {}", pending.step);
            return None;
        }
        self.next().ok().flatten()
    }

    /// Move forward one step; on the last step this completes the quiz and
    /// yields the answers. Completion is reported once. A single-choice step
    /// must have an answer recorded before it can be left this way.
    pub fn next(&mut self) -> Result<Option<QuizAnswers>, QuizError> {
        let i = self.active_step()?;
        let step = &STEPS[i];
        let answered = match step.id {
            StepId::Product => self.answers.product.is_some(),
            StepId::Level => self.answers.level.is_some(),
            StepId::Priority => self.answers.priority.is_some(),
            StepId::Tech => true,
        };
        if !answered {
            return Err(QuizError::Unanswered(step.id));
        }
        self.generation += 1;
        if i + 1 < STEPS.len() {
            self.phase = Phase::Step(i + 1);
            Ok(None)
        } else {
            self.phase = Phase::Complete;
            Ok(Some(self.answers.clone()))
        }
    }

    /// Previous step, keeping recorded answers. No-op on the first step.
    pub fn back(&mut self) -> Result<(), QuizError> {
        let i = self.active_step()?;
        self.generation += 1;
        if i > 0 {
            self.phase = Phase::Step(i - 1);
        }
        Ok(())
    }

    /// Close the quiz without finishing; in-progress answers are dropped.
    pub fn cancel(&mut self) {
        if let Phase::Step(_) = self.phase {
            self.phase = Phase::Cancelled;
            self.answers = QuizAnswers::default();
            self.generation += 1;
        }
    }
}
