//! Run Meeting use case
//!
//! Drives one simulated meeting from its seed text to termination.
//!
//! # Turn loop
//!
//! 1. **Seed**: classify the opening text and record it as turn 0
//! 2. **Select**: draw the next speaker, excluding the previous one unless
//!    they are dominant enough to go again
//! 3. **Generate**: ask the response generator for the utterance
//! 4. **Reclassify**: the topic is re-derived from what was just said
//! 5. **Record**: snapshot every participant's score for the new topic
//! 6. **Stop?**: end on the turn limit or an early-stop signal

use crate::config::MeetingParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{MeetingProgress, NoProgress};
use crate::ports::response_generator::{ResponseGenerator, ResponseRequest};
use crate::ports::topic_classifier::TopicClassifier;
use huddle_domain::{
    DomainError, EngagementContext, MeetingAnalytics, ProfileCatalog, ResponseKind,
    ResponseMemory, Roster, SessionEnd, SpeakerDistribution, StopTrigger, Topic, Transcript,
    TurnRecord, consecutive_exclusion, probabilities, select_speaker,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur when starting a meeting
///
/// Only configuration problems are fatal, and only before the first turn.
#[derive(Error, Debug)]
pub enum RunMeetingError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] DomainError),
}

/// Input for the RunMeeting use case
#[derive(Debug, Clone)]
pub struct RunMeetingInput {
    /// Text that opens the meeting
    pub topic_text: String,
    /// Participants to seat; empty means everyone in the catalog
    pub roster: Vec<String>,
    /// Turn loop control
    pub params: MeetingParams,
}

impl RunMeetingInput {
    pub fn new(topic_text: impl Into<String>) -> Self {
        Self {
            topic_text: topic_text.into(),
            roster: Vec::new(),
            params: MeetingParams::default(),
        }
    }

    pub fn with_roster<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.roster = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_params(mut self, params: MeetingParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.params = self.params.with_max_turns(max);
        self
    }
}

/// Complete result of a meeting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingResult {
    /// The opening text
    pub topic_text: String,
    /// Participants who attended
    pub roster: Vec<String>,
    /// Every turn, seed first
    pub transcript: Transcript,
    /// Why the meeting ended
    pub end: SessionEnd,
    /// Summary computed from the transcript
    pub analytics: MeetingAnalytics,
}

/// Use case for running a meeting
pub struct RunMeetingUseCase<C: TopicClassifier, G: ResponseGenerator> {
    catalog: Arc<ProfileCatalog>,
    classifier: Arc<C>,
    generator: Arc<G>,
    logger: Arc<dyn ConversationLogger>,
}

impl<C: TopicClassifier, G: ResponseGenerator> RunMeetingUseCase<C, G> {
    pub fn new(catalog: Arc<ProfileCatalog>, classifier: Arc<C>, generator: Arc<G>) -> Self {
        Self {
            catalog,
            classifier,
            generator,
            logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute<R: Rng>(
        &self,
        input: RunMeetingInput,
        rng: &mut R,
    ) -> Result<MeetingResult, RunMeetingError> {
        self.execute_with_progress(input, rng, &NoProgress)
    }

    /// Execute the use case with progress callbacks
    pub fn execute_with_progress<R: Rng>(
        &self,
        input: RunMeetingInput,
        rng: &mut R,
        progress: &dyn MeetingProgress,
    ) -> Result<MeetingResult, RunMeetingError> {
        let roster = self.resolve_roster(&input)?;
        let params = &input.params;
        let context = EngagementContext::from_roster(&roster);

        info!(
            "Starting meeting with {} participants: {}",
            roster.len(),
            roster.names().join(", ")
        );

        // Session state: owned by this call, dropped when it returns
        let mut transcript = Transcript::new();
        let mut memory = ResponseMemory::new();
        let mut last_speaker: Option<String> = None;

        let seed_topic = self.classifier.classify(&input.topic_text);
        let seed = TurnRecord::seed(
            input.topic_text.as_str(),
            seed_topic,
            &snapshot(&roster, seed_topic, &context),
        );
        debug!("Seed topic: {}", seed_topic);
        progress.on_meeting_start(&seed, params.max_turns);
        self.logger.log(ConversationEvent::meeting_started(
            &input.topic_text,
            seed_topic,
            &roster.names(),
            params.max_turns,
        ));
        transcript.push(seed);

        let mut topic = seed_topic;
        let mut end = SessionEnd::TurnLimit {
            turns: params.max_turns,
        };

        for turn in 1..=params.max_turns {
            let previous = last_speaker.as_deref().and_then(|name| roster.get(name));
            let exclude = consecutive_exclusion(previous);

            // The exclusion set only ever names a roster member
            let speaker = select_speaker(&roster, topic, &context, &exclude, &mut *rng)?;
            let name = speaker.name().to_string();
            debug!("Turn {}: {} selected on {} (excluded: {:?})", turn, name, topic, exclude);

            let request = ResponseRequest {
                participant: speaker,
                seed_text: &input.topic_text,
                topic,
                recent: transcript.recent(params.recent_turns),
            };

            let (message, kind, generator_stop) =
                match self.generator.generate(&request, &mut memory, &mut *rng) {
                    Ok(utterance) => (utterance.text, ResponseKind::Generated, utterance.ends_session),
                    Err(e) => {
                        warn!("Response generation failed for {}: {}", name, e);
                        (fallback_message(&name), ResponseKind::Fallback, false)
                    }
                };

            topic = self.classifier.classify(&message);
            let record = TurnRecord::new(
                turn,
                name.as_str(),
                message,
                topic,
                kind,
                &snapshot(&roster, topic, &context),
            );

            let trigger = if generator_stop {
                Some(StopTrigger::Generator)
            } else {
                params
                    .early_stop
                    .as_ref()
                    .filter(|rule| rule.matches(&record.speaker, &record.message))
                    .map(|rule| StopTrigger::Keyword {
                        keyword: rule.keyword.clone(),
                    })
            };

            progress.on_turn(&record);
            self.log_turn(&record);
            transcript.push(record);
            last_speaker = Some(name.clone());

            if let Some(trigger) = trigger {
                info!("Meeting stopped early by {} at turn {}", name, turn);
                end = SessionEnd::EarlyStop {
                    turn,
                    speaker: name,
                    trigger,
                };
                break;
            }
        }

        info!("Meeting ended: {}", end);
        progress.on_meeting_end(&end);
        self.logger
            .log(ConversationEvent::meeting_ended(&end, transcript.len()));

        let analytics = MeetingAnalytics::from_transcript(&transcript, &roster);
        Ok(MeetingResult {
            topic_text: input.topic_text,
            roster: roster.names(),
            transcript,
            end,
            analytics,
        })
    }

    fn resolve_roster(&self, input: &RunMeetingInput) -> Result<Roster, RunMeetingError> {
        let roster = if input.roster.is_empty() {
            self.catalog.full_roster()?
        } else {
            self.catalog.roster(&input.roster)?
        };

        if let Some(rule) = &input.params.early_stop {
            self.catalog.get(&rule.participant)?;
        }
        Ok(roster)
    }

    fn log_turn(&self, record: &TurnRecord) {
        self.logger.log(ConversationEvent::turn(record));
    }
}

/// Scores for the whole roster, uniform when nobody has any influence
fn snapshot(roster: &Roster, topic: Topic, context: &EngagementContext) -> SpeakerDistribution {
    probabilities(roster, topic, context)
}

/// Placeholder written when the generator fails
pub fn fallback_message(name: &str) -> String {
    format!("[{} would respond here, but response generation failed]", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::response_generator::{GenerationError, Utterance};
    use crate::ports::topic_classifier::FixedTopic;
    use huddle_domain::{EarlyStopRule, ParticipantProfile, SuppressionRule};
    use rand::RngCore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Mutex;

    /// Labels text containing "beet" as beets, everything else as management
    struct BeetSpotter;

    impl TopicClassifier for BeetSpotter {
        fn classify(&self, text: &str) -> Topic {
            if text.to_lowercase().contains("beet") {
                Topic::Beets
            } else {
                Topic::Management
            }
        }
    }

    /// Repeats a fixed line and remembers the context sizes it was given
    struct Parrot {
        line: String,
        seen_context: Mutex<Vec<usize>>,
    }

    impl Parrot {
        fn new(line: &str) -> Self {
            Self {
                line: line.to_string(),
                seen_context: Mutex::new(Vec::new()),
            }
        }
    }

    impl ResponseGenerator for Parrot {
        fn generate(
            &self,
            request: &ResponseRequest<'_>,
            _memory: &mut ResponseMemory,
            _rng: &mut dyn RngCore,
        ) -> Result<Utterance, GenerationError> {
            self.seen_context.lock().unwrap().push(request.recent.len());
            Ok(Utterance::new(format!("{}: {}", request.participant.name(), self.line)))
        }
    }

    struct Broken;

    impl ResponseGenerator for Broken {
        fn generate(
            &self,
            request: &ResponseRequest<'_>,
            _memory: &mut ResponseMemory,
            _rng: &mut dyn RngCore,
        ) -> Result<Utterance, GenerationError> {
            Err(GenerationError::Unavailable(format!(
                "no model for {}",
                request.participant.name()
            )))
        }
    }

    /// Says its lines in order, never repeating within a meeting
    struct Rotation(Vec<&'static str>);

    impl ResponseGenerator for Rotation {
        fn generate(
            &self,
            request: &ResponseRequest<'_>,
            memory: &mut ResponseMemory,
            _rng: &mut dyn RngCore,
        ) -> Result<Utterance, GenerationError> {
            let name = request.participant.name();
            let line = self
                .0
                .iter()
                .find(|line| !memory.is_used(name, line))
                .ok_or_else(|| GenerationError::NoLines(name.to_string()))?;
            memory.remember(name, *line);
            Ok(Utterance::new(*line))
        }
    }

    /// Ends the meeting on its first utterance
    struct Walkout;

    impl ResponseGenerator for Walkout {
        fn generate(
            &self,
            _request: &ResponseRequest<'_>,
            _memory: &mut ResponseMemory,
            _rng: &mut dyn RngCore,
        ) -> Result<Utterance, GenerationError> {
            Ok(Utterance::ending("I'm out."))
        }
    }

    fn office() -> Arc<ProfileCatalog> {
        Arc::new(
            ProfileCatalog::from_profiles([
                ParticipantProfile::new("Michael", 0.8, 0.9)
                    .with_multiplier(Topic::Management, 2.0),
                ParticipantProfile::new("Dwight", 0.6, 0.7).with_multiplier(Topic::Beets, 2.5),
                ParticipantProfile::new("Erin", 0.2, 0.2),
                ParticipantProfile::new("Toby", 0.15, 0.3)
                    .with_suppression(SuppressionRule::new("Michael").exempt_on(Topic::Hr)),
            ])
            .unwrap(),
        )
    }

    fn use_case<G: ResponseGenerator>(generator: G) -> RunMeetingUseCase<BeetSpotter, G> {
        RunMeetingUseCase::new(office(), Arc::new(BeetSpotter), Arc::new(generator))
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn test_five_turns_give_six_records() {
        let result = use_case(Parrot::new("sure"))
            .execute(RunMeetingInput::new("Quarterly meeting").with_max_turns(5), &mut rng())
            .unwrap();

        assert_eq!(result.transcript.len(), 6);
        assert_eq!(result.end, SessionEnd::TurnLimit { turns: 5 });

        let seed = &result.transcript.records()[0];
        assert_eq!(seed.turn, 0);
        assert_eq!(seed.speaker, huddle_domain::MODERATOR);
        assert_eq!(seed.response_kind, ResponseKind::Seed);
        assert_eq!(seed.message, "Quarterly meeting");

        let turns: Vec<_> = result.transcript.iter().map(|r| r.turn).collect();
        assert_eq!(turns, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_zero_turns_records_only_the_seed() {
        let result = use_case(Parrot::new("sure"))
            .execute(RunMeetingInput::new("Quick one").with_max_turns(0), &mut rng())
            .unwrap();
        assert_eq!(result.transcript.len(), 1);
        assert_eq!(result.analytics.total_turns, 0);
    }

    #[test]
    fn test_every_snapshot_covers_roster_and_sums_to_one() {
        let result = use_case(Parrot::new("beets are great"))
            .execute(RunMeetingInput::new("Meeting").with_max_turns(4), &mut rng())
            .unwrap();

        for record in result.transcript.iter() {
            assert_eq!(record.snapshot.len(), 4);
            let total: f64 = record.snapshot.values().map(|s| s.probability).sum();
            assert!((total - 1.0).abs() < 1e-9);
        }
    }

    #[derive(Default)]
    struct Minutes(Mutex<Vec<ConversationEvent>>);

    impl ConversationLogger for Minutes {
        fn log(&self, event: ConversationEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_logger_gets_start_every_turn_and_end() {
        let minutes = Arc::new(Minutes::default());
        let logger: Arc<dyn ConversationLogger> = minutes.clone();
        use_case(Parrot::new("sure"))
            .with_logger(logger)
            .execute(RunMeetingInput::new("Meeting").with_max_turns(3), &mut rng())
            .unwrap();

        let events = minutes.0.lock().unwrap();
        let kinds: Vec<_> = events.iter().map(|e| e.type_name()).collect();
        assert_eq!(kinds, vec!["meeting_started", "turn", "turn", "turn", "meeting_ended"]);
        assert_eq!(events[0].payload["roster"].as_array().unwrap().len(), 4);
        assert_eq!(events[3].payload["turn"], 3);
        assert_eq!(events[4].payload["records"], 4);
    }

    #[test]
    fn test_meeting_keeps_going_when_nobody_cares_about_the_topic() {
        let catalog = Arc::new(
            ProfileCatalog::from_profiles(["Oscar", "Angela", "Kevin", "Phyllis"].map(|name| {
                ParticipantProfile::new(name, 0.5, 0.5).with_multiplier(Topic::Beets, 0.0)
            }))
            .unwrap(),
        );
        let use_case = RunMeetingUseCase::new(
            catalog,
            Arc::new(FixedTopic(Topic::Beets)),
            Arc::new(Parrot::new("hm")),
        );
        let result = use_case
            .execute(RunMeetingInput::new("Beet harvest").with_max_turns(30), &mut rng())
            .unwrap();

        assert_eq!(result.transcript.len(), 31);
        assert_eq!(result.end, SessionEnd::TurnLimit { turns: 30 });
        for record in result.transcript.iter() {
            assert_eq!(record.topic, Topic::Beets);
            assert_eq!(record.snapshot.len(), 4);
            for score in record.snapshot.values() {
                assert_eq!(score.radius, 0.0);
                assert!((score.probability - 0.25).abs() < 1e-12);
            }
        }

        let records = &result.transcript.records()[1..];
        assert!(records.iter().all(|r| !r.is_fallback()));
        for pair in records.windows(2) {
            assert_ne!(pair[0].speaker, pair[1].speaker);
        }
        let speakers: std::collections::BTreeSet<_> =
            records.iter().map(|r| r.speaker.as_str()).collect();
        assert_eq!(speakers.len(), 4);
    }

    #[test]
    fn test_topic_is_reclassified_from_each_response() {
        let result = use_case(Parrot::new("let me tell you about beets"))
            .execute(RunMeetingInput::new("Budget meeting").with_max_turns(3), &mut rng())
            .unwrap();

        let topics: Vec<_> = result.transcript.iter().map(|r| r.topic).collect();
        assert_eq!(
            topics,
            vec![Topic::Management, Topic::Beets, Topic::Beets, Topic::Beets]
        );
        // Dwight's beets multiplier caps his radius in the drifted snapshots
        let dwight = result.transcript.records()[1].score("Dwight").unwrap();
        assert_eq!(dwight.radius, 1.0);
        let dwight_seed = result.transcript.records()[0].score("Dwight").unwrap();
        assert!((dwight_seed.radius - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_generator_failure_writes_fallback_and_continues() {
        let result = use_case(Broken)
            .execute(RunMeetingInput::new("Meeting").with_max_turns(4), &mut rng())
            .unwrap();

        assert_eq!(result.transcript.len(), 5);
        for record in &result.transcript.records()[1..] {
            assert!(record.is_fallback());
            assert_eq!(record.message, fallback_message(&record.speaker));
        }
        assert_eq!(result.analytics.fallback_turns, 4);
    }

    #[test]
    fn test_fallback_speaker_still_counts_as_last_speaker() {
        // Erin cannot follow herself, even when her turn was a fallback
        let result = use_case(Broken)
            .execute(
                RunMeetingInput::new("Meeting")
                    .with_roster(["Erin", "Toby"])
                    .with_max_turns(6),
                &mut rng(),
            )
            .unwrap();

        let speakers: Vec<_> = result.transcript.records()[1..]
            .iter()
            .map(|r| r.speaker.as_str())
            .collect();
        for pair in speakers.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_dominant_speaker_may_hold_the_floor() {
        let catalog = Arc::new(
            ProfileCatalog::from_profiles([
                ParticipantProfile::new("Michael", 0.8, 0.9),
                ParticipantProfile::new("Meredith", 0.0, 0.2),
            ])
            .unwrap(),
        );
        let use_case = RunMeetingUseCase::new(
            catalog,
            Arc::new(FixedTopic(Topic::General)),
            Arc::new(Parrot::new("and another thing")),
        );
        let result = use_case
            .execute(RunMeetingInput::new("Meeting").with_max_turns(6), &mut rng())
            .unwrap();

        // Meredith has no influence, Michael is never excluded
        assert!(
            result.transcript.records()[1..]
                .iter()
                .all(|r| r.speaker == "Michael")
        );
    }

    #[test]
    fn test_less_dominant_speakers_alternate() {
        let catalog = Arc::new(
            ProfileCatalog::from_profiles([
                ParticipantProfile::new("Dwight", 0.6, 0.7),
                ParticipantProfile::new("Meredith", 0.0, 0.2),
            ])
            .unwrap(),
        );
        let use_case = RunMeetingUseCase::new(
            catalog,
            Arc::new(FixedTopic(Topic::General)),
            Arc::new(Parrot::new("fine")),
        );
        let result = use_case
            .execute(RunMeetingInput::new("Meeting").with_max_turns(4), &mut rng())
            .unwrap();

        let speakers: Vec<_> = result.transcript.records()[1..]
            .iter()
            .map(|r| r.speaker.as_str())
            .collect();
        assert_eq!(speakers, vec!["Dwight", "Meredith", "Dwight", "Meredith"]);
    }

    #[test]
    fn test_recent_context_is_capped_at_three_records() {
        let parrot = Arc::new(Parrot::new("ok"));
        let use_case = RunMeetingUseCase::new(office(), Arc::new(BeetSpotter), Arc::clone(&parrot));
        use_case
            .execute(RunMeetingInput::new("Meeting").with_max_turns(5), &mut rng())
            .unwrap();

        assert_eq!(*parrot.seen_context.lock().unwrap(), vec![1, 2, 3, 3, 3]);
    }

    #[test]
    fn test_keyword_rule_stops_meeting() {
        let input = RunMeetingInput::new("HR complaint")
            .with_roster(["Toby"])
            .with_params(
                MeetingParams::default()
                    .with_max_turns(10)
                    .with_early_stop(EarlyStopRule::new("Toby", "policy")),
            );
        let result = use_case(Parrot::new("according to company policy"))
            .execute(input, &mut rng())
            .unwrap();

        assert_eq!(result.transcript.len(), 2);
        assert_eq!(
            result.end,
            SessionEnd::EarlyStop {
                turn: 1,
                speaker: "Toby".to_string(),
                trigger: StopTrigger::Keyword {
                    keyword: "policy".to_string()
                },
            }
        );
    }

    #[test]
    fn test_generator_can_end_meeting() {
        let result = use_case(Walkout)
            .execute(RunMeetingInput::new("Meeting").with_max_turns(10), &mut rng())
            .unwrap();
        assert_eq!(result.transcript.len(), 2);
        assert!(matches!(
            result.end,
            SessionEnd::EarlyStop {
                turn: 1,
                trigger: StopTrigger::Generator,
                ..
            }
        ));
    }

    #[test]
    fn test_response_memory_resets_between_meetings() {
        let use_case = use_case(Rotation(vec!["first", "second"]));
        let input = RunMeetingInput::new("Meeting")
            .with_roster(["Michael"])
            .with_max_turns(2);

        for _ in 0..2 {
            let result = use_case.execute(input.clone(), &mut rng()).unwrap();
            let messages: Vec<_> = result.transcript.records()[1..]
                .iter()
                .map(|r| r.message.as_str())
                .collect();
            assert_eq!(messages, vec!["first", "second"]);
        }
    }

    #[test]
    fn test_same_seed_reproduces_transcript() {
        let use_case = use_case(Parrot::new("ok"));
        let input = RunMeetingInput::new("Meeting").with_max_turns(8);
        let a = use_case
            .execute(input.clone(), &mut StdRng::seed_from_u64(99))
            .unwrap();
        let b = use_case
            .execute(input, &mut StdRng::seed_from_u64(99))
            .unwrap();
        assert_eq!(a.transcript, b.transcript);
    }

    #[test]
    fn test_unknown_roster_name_is_fatal() {
        let err = use_case(Parrot::new("ok"))
            .execute(
                RunMeetingInput::new("Meeting").with_roster(["Michael", "Jim"]),
                &mut rng(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            RunMeetingError::Configuration(DomainError::UnknownParticipant(ref name)) if name == "Jim"
        ));
    }

    #[test]
    fn test_unknown_early_stop_participant_is_fatal() {
        let input = RunMeetingInput::new("Meeting").with_params(
            MeetingParams::default().with_early_stop(EarlyStopRule::new("Jan", "policy")),
        );
        assert!(use_case(Parrot::new("ok")).execute(input, &mut rng()).is_err());
    }
}
