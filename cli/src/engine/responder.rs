//! # rulebot Responder
//!
//! File: cli/src/engine/responder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Runs one full turn of the conversation:
//!
//! 1. Trim the input and record it in the log.
//! 2. Try the arithmetic extractor; a result short-circuits everything else.
//! 3. Otherwise scan the pattern table and pick a random reply of the first
//!    matching rule.
//! 4. Otherwise pick a random fallback reply.
//! 5. Record the reply.
//! 6. Decide whether the session ends by looking for exit keywords as plain
//!    substrings of the lowercased input.
//!
//! Step 6 is independent of which branch produced the reply: `"5 + 3, bye"`
//! answers with the sum and still ends the session. The farewell rule's
//! terminal marker is only reported in the logs; the substring check is what
//! callers act on.
//!
//! ## Randomness
//!
//! Reply selection draws from any `rand::Rng`. `Responder::new` seeds from the
//! OS, `Responder::with_seed` gives reproducible sessions, and tests can pass
//! a fixed source through `Responder::with_rng`.
//!
//! ## Examples
//!
//! ```rust
//! use rulebot::engine::responder::{ReplySource, Responder};
//!
//! let mut bot = Responder::with_seed(42).unwrap();
//!
//! let outcome = bot.process_turn("  what is 6 * 7?  ");
//! assert_eq!(outcome.reply_text, "6 × 7 = 42");
//! assert_eq!(outcome.source, ReplySource::Arithmetic);
//! assert!(!outcome.should_exit);
//!
//! assert!(bot.process_turn("ok, goodbye").should_exit);
//! assert_eq!(bot.log().len(), 4);
//! ```
//!
use crate::core::error::Result;
use crate::engine::arithmetic::ArithmeticExtractor;
use crate::engine::log::{ConversationLog, Speaker};
use crate::engine::rules::{PatternTable, Topic};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Replies used when neither arithmetic nor any rule applies.
pub const FALLBACK_REPLIES: [&str; 6] = [
    "That's interesting! Tell me more about that.",
    "I'm not sure I understand completely, but I'm here to listen!",
    "Could you rephrase that? I'd love to help if I can.",
    "That's a great point! What else would you like to talk about?",
    "I'm still learning! Can you ask me something else?",
    "Hmm, that's beyond my current knowledge. Try asking about the weather, time, or math!",
];

/// Substrings of the lowercased input that end the session.
pub const EXIT_KEYWORDS: [&str; 6] = ["bye", "goodbye", "quit", "exit", "see you", "farewell"];

/// Which branch produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Arithmetic,
    Rule(Topic),
    Fallback,
}

/// Result of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub reply_text: String,
    pub should_exit: bool,
    pub source: ReplySource,
}

/// Returns true if `input` contains an exit keyword anywhere, ignoring case.
pub fn wants_exit(input: &str) -> bool {
    let lowered = input.to_lowercase();
    EXIT_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// Turns user lines into replies and keeps the conversation log.
pub struct Responder<R: Rng = StdRng> {
    table: PatternTable,
    arithmetic: ArithmeticExtractor,
    log: ConversationLog,
    rng: R,
}

impl Responder<StdRng> {
    /// # New Responder (`new`)
    ///
    /// Builds a responder over the standard pattern table with a random source
    /// seeded from the operating system.
    ///
    /// ## Returns
    ///
    /// * `Result<Responder>` - A responder with an empty conversation log.
    ///
    /// ## Errors
    ///
    /// Returns an `Err` if the standard table or the arithmetic patterns fail
    /// to build (`RulebotError::Pattern`, `NoKeywords` or `EmptyResponses`).
    pub fn new() -> Result<Self> {
        Self::with_rng(StdRng::from_entropy())
    }

    /// # Seeded Responder (`with_seed`)
    ///
    /// Builds a responder whose reply choices are reproducible: two responders
    /// built with the same `seed` give the same replies to the same inputs.
    ///
    /// ## Arguments
    ///
    /// * `seed` - Seed for the `StdRng` that picks among a rule's replies.
    ///
    /// ## Errors
    ///
    /// Same as `Responder::new`.
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Responder<R> {
    /// # Responder With Random Source (`with_rng`)
    ///
    /// Builds a responder over the standard table using any caller-supplied
    /// random source, e.g. `rand::rngs::mock::StepRng` in tests.
    ///
    /// ## Arguments
    ///
    /// * `rng` - Random source used for every reply choice.
    ///
    /// ## Returns
    ///
    /// * `Result<Responder<R>>` - A responder with an empty conversation log.
    ///
    /// ## Errors
    ///
    /// Returns an `Err` if the standard table or the arithmetic patterns fail
    /// to build.
    pub fn with_rng(rng: R) -> Result<Self> {
        Ok(Self::from_parts(
            PatternTable::standard()?,
            ArithmeticExtractor::new()?,
            rng,
        ))
    }

    /// # Responder From Parts (`from_parts`)
    ///
    /// Assembles a responder from a custom table and extractor. Nothing is
    /// compiled here, so this cannot fail.
    ///
    /// ## Arguments
    ///
    /// * `table` - Rules consulted after arithmetic, in order.
    /// * `arithmetic` - Extractor tried first on every turn.
    /// * `rng` - Random source for reply choices.
    pub fn from_parts(table: PatternTable, arithmetic: ArithmeticExtractor, rng: R) -> Self {
        Self {
            table,
            arithmetic,
            log: ConversationLog::new(),
            rng,
        }
    }

    /// Processes one line of user input.
    pub fn process_turn(&mut self, raw: &str) -> SessionOutcome {
        let input = raw.trim();
        self.log.record(Speaker::User, input);

        let (reply_text, source) = self.reply_to(input);
        self.log.record(Speaker::Bot, reply_text.as_str());

        let should_exit = wants_exit(input);
        debug!(
            "Turn processed: source={:?}, should_exit={}",
            source, should_exit
        );

        SessionOutcome {
            reply_text,
            should_exit,
            source,
        }
    }

    /// The conversation so far.
    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn table(&self) -> &PatternTable {
        &self.table
    }

    fn reply_to(&mut self, input: &str) -> (String, ReplySource) {
        if let Some(result) = self.arithmetic.extract(input) {
            return (result, ReplySource::Arithmetic);
        }

        if let Some(rule) = self.table.find_match(input) {
            if rule.is_terminal() {
                trace!("Matched terminal rule '{}'", rule.topic());
            }
            let reply = rule.pick(&mut self.rng).render();
            return (reply, ReplySource::Rule(rule.topic()));
        }

        let reply = FALLBACK_REPLIES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(FALLBACK_REPLIES[0]);
        (reply.to_string(), ReplySource::Fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rules::Reply;
    use rand::rngs::mock::StepRng;

    fn bot() -> Responder {
        Responder::with_seed(1234).expect("responder should build")
    }

    fn rule_texts(bot: &Responder, topic: Topic) -> Vec<String> {
        bot.table()
            .rules()
            .iter()
            .find(|rule| rule.topic() == topic)
            .expect("topic present")
            .responses()
            .iter()
            .filter_map(|reply| match reply {
                Reply::Text(text) => Some(text.to_string()),
                Reply::Clock(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_arithmetic_short_circuits_rules() {
        let mut bot = bot();
        // "hello" would match the greeting rule.
        let outcome = bot.process_turn("hello, what is 2 + 2?");
        assert_eq!(outcome.reply_text, "2 + 2 = 4");
        assert_eq!(outcome.source, ReplySource::Arithmetic);
    }

    #[test]
    fn test_addition_property() {
        let mut bot = bot();
        for (a, b) in [(0u64, 0u64), (1, 99), (123456, 654321), (40, 2)] {
            let outcome = bot.process_turn(&format!("{a} + {b}"));
            assert_eq!(outcome.reply_text, format!("{a} + {b} = {}", a + b));
            assert_eq!(outcome.source, ReplySource::Arithmetic);
        }
    }

    #[test]
    fn test_greeting_reply_from_rule_set() {
        let mut bot = bot();
        let allowed = rule_texts(&bot, Topic::Greeting);
        let outcome = bot.process_turn("Hello there");
        assert_eq!(outcome.source, ReplySource::Rule(Topic::Greeting));
        assert!(allowed.contains(&outcome.reply_text));
        assert!(!outcome.should_exit);
    }

    #[test]
    fn test_fallback_for_unknown_input() {
        let mut bot = bot();
        let outcome = bot.process_turn("purple elephant sonnet");
        assert_eq!(outcome.source, ReplySource::Fallback);
        assert!(FALLBACK_REPLIES.contains(&outcome.reply_text.as_str()));
        assert!(!outcome.should_exit);
    }

    #[test]
    fn test_fixed_random_source() {
        let mut bot = Responder::with_rng(StepRng::new(0, 0)).unwrap();
        assert_eq!(
            bot.process_turn("purple elephant sonnet").reply_text,
            FALLBACK_REPLIES[0]
        );
        assert_eq!(
            bot.process_turn("thanks").reply_text,
            "You're welcome! Happy to help."
        );
    }

    #[test]
    fn test_exit_detected_on_every_branch() {
        let mut bot = bot();

        let math = bot.process_turn("5 + 3 then bye");
        assert_eq!(math.source, ReplySource::Arithmetic);
        assert!(math.should_exit);

        let fallback = bot.process_turn("xyzzy quitting");
        assert_eq!(fallback.source, ReplySource::Fallback);
        assert!(fallback.should_exit);

        let greeting = bot.process_turn("Hello and GOODBYE");
        assert_eq!(greeting.source, ReplySource::Rule(Topic::Greeting));
        assert!(greeting.should_exit);
    }

    #[test]
    fn test_exit_is_substring_based() {
        assert!(wants_exit("EXIT"));
        assert!(wants_exit("the exits are there"));
        assert!(wants_exit("I'll See You soon"));
        assert!(wants_exit("farewells"));
        assert!(!wants_exit("take care"));
        assert!(!wants_exit("later"));
        assert!(!wants_exit("hello"));
    }

    #[test]
    fn test_terminal_rule_without_exit_keyword_does_not_exit() {
        let mut bot = bot();
        let outcome = bot.process_turn("talk to you later");
        assert_eq!(outcome.source, ReplySource::Rule(Topic::Farewell));
        assert!(!outcome.should_exit);
    }

    #[test]
    fn test_log_grows_by_two_per_turn() {
        let mut bot = bot();
        for (turn, input) in ["hi", "7 / 0", "nonsense words", "bye"].iter().enumerate() {
            bot.process_turn(input);
            assert_eq!(bot.log().len(), (turn + 1) * 2);
        }

        let events = bot.log().events();
        for pair in events.chunks(2) {
            assert_eq!(pair[0].speaker, Speaker::User);
            assert_eq!(pair[1].speaker, Speaker::Bot);
        }
        assert_eq!(events[2].text, "7 / 0");
        assert_eq!(events[3].text, crate::engine::arithmetic::DIVIDE_BY_ZERO);
    }

    #[test]
    fn test_input_is_trimmed_before_logging() {
        let mut bot = bot();
        bot.process_turn("   hey   \n");
        assert_eq!(bot.log().events()[0].text, "hey");
    }

    #[test]
    fn test_oversized_numbers_fall_through_to_rules() {
        let mut bot = bot();
        let outcome = bot.process_turn("hello 99999999999999999999999 + 1");
        assert_eq!(outcome.source, ReplySource::Rule(Topic::Greeting));
    }

    #[test]
    fn test_time_rule_reads_clock() {
        let mut bot = Responder::with_rng(StepRng::new(0, 0)).unwrap();
        let outcome = bot.process_turn("what time is it");
        assert_eq!(outcome.source, ReplySource::Rule(Topic::Time));
        assert!(outcome.reply_text.starts_with("The current time is "));
    }
}
