//! Session state machine

use std::fmt;
use thiserror::Error;

/// Session phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Listening,
    WaitingForUser,
    Recording,
    Processing,
    Finished,
}

impl SessionPhase {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Listening => "listening",
            Self::WaitingForUser => "waiting_for_user",
            Self::Recording => "recording",
            Self::Processing => "processing",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while in {current_phase} phase")]
pub struct InvalidStateTransition {
    pub current_phase: SessionPhase,
    pub action: String,
}

/// Session entity.
/// Owns the phase and the current prompt index, and enforces the legal
/// transitions; callers that drive the session cannot corrupt it from the
/// wrong phase.
///
/// State machine:
///   IDLE            -> LISTENING        (begin_listening)
///   LISTENING       -> WAITING_FOR_USER (finish_playback)
///   WAITING_FOR_USER-> RECORDING        (begin_recording)
///   WAITING_FOR_USER-> LISTENING        (replay, error recovery)
///   RECORDING       -> PROCESSING       (begin_processing)
///   PROCESSING      -> LISTENING        (resume_listening, more prompts)
///   PROCESSING      -> FINISHED         (finish, last prompt)
///   PROCESSING      -> WAITING_FOR_USER (fail_processing)
///   any             -> IDLE             (reset)
#[derive(Debug, Default)]
pub struct Session {
    phase: SessionPhase,
    current_index: usize,
}

impl Session {
    /// Create a new session in the idle phase at prompt 0
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            current_index: 0,
        }
    }

    /// Get the current phase
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// 0-based pointer into the prompt catalog
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Check if currently idle
    pub fn is_idle(&self) -> bool {
        self.phase == SessionPhase::Idle
    }

    /// Check if the session has produced its final report
    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    fn guard(
        &self,
        expected: SessionPhase,
        action: &str,
    ) -> Result<(), InvalidStateTransition> {
        if self.phase != expected {
            return Err(InvalidStateTransition {
                current_phase: self.phase,
                action: action.to_string(),
            });
        }
        Ok(())
    }

    /// Transition from IDLE to LISTENING (device acquired, playback starts)
    pub fn begin_listening(&mut self) -> Result<(), InvalidStateTransition> {
        self.guard(SessionPhase::Idle, "begin listening")?;
        self.phase = SessionPhase::Listening;
        Ok(())
    }

    /// Transition from LISTENING to WAITING_FOR_USER (playback done or failed)
    pub fn finish_playback(&mut self) -> Result<(), InvalidStateTransition> {
        self.guard(SessionPhase::Listening, "finish playback")?;
        self.phase = SessionPhase::WaitingForUser;
        Ok(())
    }

    /// Transition from WAITING_FOR_USER to RECORDING
    pub fn begin_recording(&mut self) -> Result<(), InvalidStateTransition> {
        self.guard(SessionPhase::WaitingForUser, "begin recording")?;
        self.phase = SessionPhase::Recording;
        Ok(())
    }

    /// Transition from WAITING_FOR_USER back to LISTENING (replay the prompt)
    pub fn replay(&mut self) -> Result<(), InvalidStateTransition> {
        self.guard(SessionPhase::WaitingForUser, "replay prompt")?;
        self.phase = SessionPhase::Listening;
        Ok(())
    }

    /// Transition from RECORDING to PROCESSING
    pub fn begin_processing(&mut self) -> Result<(), InvalidStateTransition> {
        self.guard(SessionPhase::Recording, "begin processing")?;
        self.phase = SessionPhase::Processing;
        Ok(())
    }

    /// Advance to the next prompt. Only legal mid-processing, after the
    /// response for the current prompt has been folded in.
    pub fn advance_turn(&mut self) -> Result<(), InvalidStateTransition> {
        self.guard(SessionPhase::Processing, "advance turn")?;
        self.current_index += 1;
        Ok(())
    }

    /// Transition from PROCESSING to LISTENING (next prompt's playback)
    pub fn resume_listening(&mut self) -> Result<(), InvalidStateTransition> {
        self.guard(SessionPhase::Processing, "resume listening")?;
        self.phase = SessionPhase::Listening;
        Ok(())
    }

    /// Transition from PROCESSING to WAITING_FOR_USER (turn failed, same
    /// prompt will be retried; the index is untouched)
    pub fn fail_processing(&mut self) -> Result<(), InvalidStateTransition> {
        self.guard(SessionPhase::Processing, "fail processing")?;
        self.phase = SessionPhase::WaitingForUser;
        Ok(())
    }

    /// Transition from PROCESSING to FINISHED (last prompt answered)
    pub fn finish(&mut self) -> Result<(), InvalidStateTransition> {
        self.guard(SessionPhase::Processing, "finish session")?;
        self.phase = SessionPhase::Finished;
        Ok(())
    }

    /// Reset to IDLE at prompt 0. Legal from any phase.
    pub fn reset(&mut self) {
        self.phase = SessionPhase::Idle;
        self.current_index = 0;
    }
}
