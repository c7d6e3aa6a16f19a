//! Host capability traits
//!
//! The overlay owns no game state; the host hands it these read-only
//! capabilities at render time. Each trait is object-safe so tests can swap
//! in fixed-value doubles.

use crate::skill::Skill;

/// Supplies experience totals.
pub trait ExperienceSource {
    /// Experience for a single trainable skill.
    fn skill_experience(&self, skill: Skill) -> u64;

    /// Experience summed across all skills.
    fn overall_experience(&self) -> u64;

    /// Experience for any skill, routing [`Skill::Overall`] to the summed
    /// total.
    fn experience_for(&self, skill: Skill) -> u64 {
        match skill {
            Skill::Overall => self.overall_experience(),
            other => self.skill_experience(other),
        }
    }
}

/// Supplies per-skill goal bounds.
///
/// A negative bound means "no goal configured"; the overlay renders no bar
/// for such skills.
pub trait GoalSource {
    fn start_goal(&self, skill: Skill) -> i64;

    fn end_goal(&self, skill: Skill) -> i64;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedXp;

    impl ExperienceSource for FixedXp {
        fn skill_experience(&self, _skill: Skill) -> u64 {
            1_000
        }

        fn overall_experience(&self) -> u64 {
            50_000
        }
    }

    #[test]
    fn overall_routes_to_summed_total() {
        let source = FixedXp;
        assert_eq!(source.experience_for(Skill::Attack), 1_000);
        assert_eq!(source.experience_for(Skill::Overall), 50_000);
    }
}
