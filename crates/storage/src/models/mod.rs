mod hole_score;
mod participant;
mod round;

pub use hole_score::HoleScore;
pub use participant::{
    AttestDecision, AttestTransition, AttestationStatus, Participant, ScoreEntryAuthority,
};
pub use round::{Round, RoundEnvironment, RoundStatus};
