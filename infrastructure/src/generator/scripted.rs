//! Scripted response generator
//!
//! Picks canned lines per participant and topic, never repeating a line
//! within one meeting until the participant has said everything they have.
//!
//! # Line choice
//!
//! 1. An unused line for the current topic
//! 2. An unused line from the participant's `general` pool
//! 3. Any unused line of the participant
//! 4. Otherwise the participant's memory is cleared and the search restarts
//!
//! A line starting with [`END_MARKER`] is said without the marker and ends
//! the meeting.

use huddle_application::{GenerationError, ResponseGenerator, ResponseRequest, Utterance};
use huddle_domain::{ResponseMemory, Topic};
use rand::{Rng, RngCore};
use std::collections::BTreeMap;
use tracing::debug;

/// Prefix marking a line after which the meeting is over
pub const END_MARKER: &str = "[end]";

/// Response generator backed by fixed per-participant scripts
#[derive(Debug, Clone, Default)]
pub struct ScriptedResponseGenerator {
    scripts: BTreeMap<String, BTreeMap<Topic, Vec<String>>>,
}

impl ScriptedResponseGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add lines to `participant`'s pool for `topic`
    pub fn with_lines<S: Into<String>>(
        mut self,
        participant: &str,
        topic: Topic,
        lines: impl IntoIterator<Item = S>,
    ) -> Self {
        self.scripts
            .entry(participant.to_string())
            .or_default()
            .entry(topic)
            .or_default()
            .extend(lines.into_iter().map(Into::into));
        self
    }

    /// Total number of lines scripted for `participant`
    pub fn line_count(&self, participant: &str) -> usize {
        self.scripts
            .get(participant)
            .map_or(0, |script| script.values().map(Vec::len).sum())
    }

    fn choose<'a>(
        script: &'a BTreeMap<Topic, Vec<String>>,
        name: &str,
        topic: Topic,
        memory: &ResponseMemory,
        rng: &mut dyn RngCore,
    ) -> Option<&'a str> {
        let unused = |pool: Vec<&'a String>| -> Vec<&'a str> {
            pool.into_iter()
                .map(String::as_str)
                .filter(|line| !memory.is_used(name, line))
                .collect()
        };
        let pool_for =
            |topic: Topic| -> Vec<&'a String> { script.get(&topic).into_iter().flatten().collect() };

        let candidates = [
            unused(pool_for(topic)),
            unused(pool_for(Topic::General)),
            unused(script.values().flatten().collect()),
        ]
        .into_iter()
        .find(|candidates| !candidates.is_empty())?;

        Some(candidates[rng.gen_range(0..candidates.len())])
    }
}

impl ResponseGenerator for ScriptedResponseGenerator {
    fn generate(
        &self,
        request: &ResponseRequest<'_>,
        memory: &mut ResponseMemory,
        rng: &mut dyn RngCore,
    ) -> Result<Utterance, GenerationError> {
        let name = request.participant.name();
        let script = self
            .scripts
            .get(name)
            .filter(|script| script.values().any(|pool| !pool.is_empty()))
            .ok_or_else(|| GenerationError::NoLines(name.to_string()))?;

        let line = match Self::choose(script, name, request.topic, memory, rng) {
            Some(line) => line,
            None => {
                debug!("{} has used every line, starting over", name);
                memory.forget(name);
                Self::choose(script, name, request.topic, memory, rng)
                    .ok_or_else(|| GenerationError::NoLines(name.to_string()))?
            }
        };
        memory.remember(name, line);

        Ok(match line.strip_prefix(END_MARKER) {
            Some(rest) => Utterance::ending(rest.trim_start()),
            None => Utterance::new(line),
        })
    }
}
