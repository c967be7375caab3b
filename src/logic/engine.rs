//! Draw engine: partition, shuffle once, then assign opponents participant by participant.

use crate::logic::pots::{partition_by_pot, PotBuckets};
use crate::logic::selector::{select_opponents, AssociationCounts};
use crate::models::{
    DrawConfig, DrawError, DrawResult, DrawState, FixtureRecord, Opponent, Participant,
};
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

/// One draw run. Steps must be called in order (`partition`, `shuffle`, `assign`)
/// or all at once with [`DrawEngine::run`]. Once complete, the engine refuses further steps.
pub struct DrawEngine<R: Rng> {
    participants: Vec<Participant>,
    config: DrawConfig,
    rng: R,
    state: DrawState,
    buckets: PotBuckets,
}

impl<R: Rng> DrawEngine<R> {
    pub fn new(participants: Vec<Participant>, config: DrawConfig, rng: R) -> Self {
        Self {
            participants,
            config,
            rng,
            state: DrawState::Unstarted,
            buckets: PotBuckets::new(),
        }
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// Current pot buckets (empty until partitioned).
    pub fn buckets(&self) -> &PotBuckets {
        &self.buckets
    }

    /// Unstarted -> Partitioned.
    pub fn partition(&mut self) -> Result<(), DrawError> {
        if self.state != DrawState::Unstarted {
            return Err(DrawError::InvalidState);
        }
        self.buckets = partition_by_pot(&self.participants, &self.config)?;
        self.state = DrawState::Partitioned;
        Ok(())
    }

    /// Partitioned -> Shuffled. Each bucket is shuffled exactly once per run.
    pub fn shuffle(&mut self) -> Result<(), DrawError> {
        if self.state != DrawState::Partitioned {
            return Err(DrawError::InvalidState);
        }
        for bucket in self.buckets.values_mut() {
            bucket.shuffle(&mut self.rng);
        }
        self.state = DrawState::Shuffled;
        Ok(())
    }

    /// Shuffled -> Assigning -> Complete.
    ///
    /// Participants are visited in load order and pots in ascending order. Each
    /// participant's opponents accumulate into one sequence; the first half of the
    /// configured total become home legs and the rest away legs. A participant that
    /// cannot be given the full total keeps a short record.
    pub fn assign(&mut self) -> Result<DrawResult, DrawError> {
        if self.state != DrawState::Shuffled {
            return Err(DrawError::InvalidState);
        }
        self.state = DrawState::Assigning;

        let total = self.config.total_opponents();
        let home_legs = self.config.home_legs();
        let mut result = DrawResult::default();

        for participant in &self.participants {
            let mut counts = AssociationCounts::new();
            let mut drawn: Vec<Opponent> = Vec::with_capacity(total);

            for pot in self.config.pots() {
                let bucket = self.buckets.get(&pot).map(Vec::as_slice).unwrap_or(&[]);
                let picked =
                    select_opponents(participant, bucket, &mut counts, &self.config, &mut self.rng);
                debug!(
                    "{}: drew {} from pot {} ({})",
                    participant.name,
                    picked.len(),
                    pot,
                    picked.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", ")
                );
                drawn.extend(picked.into_iter().map(Opponent::from));
            }

            if drawn.len() < total {
                warn!(
                    "{} received {} of {} opponents",
                    participant.name,
                    drawn.len(),
                    total
                );
            }

            result.insert(
                participant.name.clone(),
                FixtureRecord::from_sequence(participant, drawn, home_legs),
            );
        }

        self.state = DrawState::Complete;
        info!("Draw complete for {} participants", result.len());
        Ok(result)
    }

    /// Run every step and hand back the result. Consumes the engine.
    pub fn run(mut self) -> Result<DrawResult, DrawError> {
        self.partition()?;
        self.shuffle()?;
        self.assign()
    }
}

/// Draw fixtures for `participants` with the given random source.
pub fn make_draw<R: Rng + ?Sized>(
    participants: &[Participant],
    config: DrawConfig,
    rng: &mut R,
) -> Result<DrawResult, DrawError> {
    info!(
        "Drawing {} participants across {} pots",
        participants.len(),
        config.pot_count
    );
    DrawEngine::new(participants.to_vec(), config, rng).run()
}
