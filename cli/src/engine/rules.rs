//! # rulebot Pattern Table
//!
//! File: cli/src/engine/rules.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The fixed, ordered catalog of conversational rules. Each `Rule` pairs a
//! case-insensitive, whole-word keyword matcher with a non-empty list of
//! replies and an optional terminal marker. The table is scanned front to back
//! and the first rule whose matcher hits anywhere in the input wins, so the
//! order of `PatternTable::standard()` is part of its behavior.
//!
//! ## Examples
//!
//! ```rust
//! use rulebot::engine::rules::{PatternTable, Topic};
//!
//! let table = PatternTable::standard().unwrap();
//! let rule = table.find_match("Hello there").unwrap();
//! assert_eq!(rule.topic(), Topic::Greeting);
//!
//! // Keywords only match whole words.
//! assert!(table.find_match("hither and thither").is_none());
//! ```
//!
use crate::core::error::{Result, RulebotError};
use chrono::{DateTime, Local};
use rand::Rng;
use regex::{Regex, RegexBuilder};
use std::fmt;
use tracing::trace;

/// Conversational category a rule answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Greeting,
    Farewell,
    WellBeing,
    Identity,
    Weather,
    Time,
    MathTalk,
    Compliment,
    Capabilities,
    Thanks,
}

impl Topic {
    /// Short lowercase label used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Greeting => "greeting",
            Topic::Farewell => "farewell",
            Topic::WellBeing => "well-being",
            Topic::Identity => "identity",
            Topic::Weather => "weather",
            Topic::Time => "time",
            Topic::MathTalk => "math-talk",
            Topic::Compliment => "compliment",
            Topic::Capabilities => "capabilities",
            Topic::Thanks => "thanks",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One candidate reply of a rule.
///
/// Clock replies are formatted when they are rendered, never when the table
/// is built, so a long-running session always reports the current time.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    /// Fixed text.
    Text(&'static str),
    /// Text derived from the local clock at render time.
    Clock(fn(DateTime<Local>) -> String),
}

impl Reply {
    /// Renders the reply against the real local clock.
    pub fn render(&self) -> String {
        self.render_at(Local::now())
    }

    /// Renders the reply as if the local clock read `now`.
    pub fn render_at(&self, now: DateTime<Local>) -> String {
        match self {
            Reply::Text(text) => (*text).to_string(),
            Reply::Clock(format) => format(now),
        }
    }
}

/// A matcher paired with its replies.
#[derive(Debug, Clone)]
pub struct Rule {
    topic: Topic,
    matcher: Regex,
    responses: Vec<Reply>,
    terminal: bool,
}

impl Rule {
    /// Builds a rule matching any of `keywords` as whole words, ignoring case.
    ///
    /// Keywords are taken literally (regex metacharacters are escaped) and may
    /// contain spaces, e.g. `"see you"`.
    ///
    /// ## Errors
    ///
    /// * `RulebotError::NoKeywords` if `keywords` is empty.
    /// * `RulebotError::EmptyResponses` if `responses` is empty.
    /// * `RulebotError::Pattern` if the combined pattern fails to compile.
    pub fn new(topic: Topic, keywords: &[&str], responses: Vec<Reply>) -> Result<Self> {
        if keywords.is_empty() {
            return Err(RulebotError::NoKeywords { topic }.into());
        }
        if responses.is_empty() {
            return Err(RulebotError::EmptyResponses { topic }.into());
        }

        let alternation = keywords
            .iter()
            .map(|keyword| regex::escape(keyword))
            .collect::<Vec<_>>()
            .join("|");
        let matcher = RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
            .case_insensitive(true)
            .build()
            .map_err(RulebotError::from)?;

        Ok(Self {
            topic,
            matcher,
            responses,
            terminal: false,
        })
    }

    /// # Mark Terminal (`terminal`)
    ///
    /// Marks the rule as hinting at the end of the session. The marker is
    /// informational: whether a turn ends the session is decided by the exit
    /// keyword check in the responder, not by which rule answered.
    ///
    /// ## Returns
    ///
    /// * `Rule` - The same rule, consumed and returned with the marker set.
    pub fn terminal(mut self) -> Self {
        self.terminal = true;
        self
    }

    /// # Rule Topic (`topic`)
    ///
    /// The conversational category this rule answers to.
    pub fn topic(&self) -> Topic {
        self.topic
    }

    /// # Is Terminal (`is_terminal`)
    ///
    /// ## Returns
    ///
    /// * `bool` - `true` if the rule was built with `terminal()`.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// # Rule Responses (`responses`)
    ///
    /// ## Returns
    ///
    /// * `&[Reply]` - The candidate replies, in declaration order. Never empty.
    pub fn responses(&self) -> &[Reply] {
        &self.responses
    }

    /// Returns true if any keyword occurs as a whole word in `input`.
    pub fn matches(&self, input: &str) -> bool {
        self.matcher.is_match(input)
    }

    /// Picks one reply uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Reply {
        // `new` rejects empty response lists, so the range is never empty.
        &self.responses[rng.gen_range(0..self.responses.len())]
    }
}

/// Ordered rule catalog; the first matching rule wins.
#[derive(Debug, Clone)]
pub struct PatternTable {
    rules: Vec<Rule>,
}

impl PatternTable {
    /// # New Pattern Table (`new`)
    ///
    /// Builds a table from already-validated rules. Order is significant:
    /// `find_match` returns the first rule that matches.
    ///
    /// ## Arguments
    ///
    /// * `rules` - Rules in priority order. May be empty, in which case nothing
    ///   ever matches and every turn falls back.
    ///
    /// ## Returns
    ///
    /// * `PatternTable` - The table. Construction cannot fail; each `Rule` was
    ///   validated by `Rule::new`.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use rulebot::engine::rules::{PatternTable, Reply, Rule, Topic};
    ///
    /// let ahoy = Rule::new(Topic::Greeting, &["ahoy"], vec![Reply::Text("Ahoy!")]).unwrap();
    /// let table = PatternTable::new(vec![ahoy]);
    /// assert_eq!(table.len(), 1);
    /// assert_eq!(table.find_match("AHOY there").map(|r| r.topic()), Some(Topic::Greeting));
    /// assert!(PatternTable::new(Vec::new()).is_empty());
    /// ```
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Builds the built-in catalog.
    pub fn standard() -> Result<Self> {
        let rules = vec![
            Rule::new(
                Topic::Greeting,
                &[
                    "hello",
                    "hi",
                    "hey",
                    "greetings",
                    "good morning",
                    "good afternoon",
                    "good evening",
                ],
                vec![
                    Reply::Text("Hello! How can I help you today?"),
                    Reply::Text("Hi there! What's on your mind?"),
                    Reply::Text("Hey! Nice to meet you. What would you like to talk about?"),
                    Reply::Text("Greetings! I'm here to chat. What can I do for you?"),
                ],
            )?,
            Rule::new(
                Topic::Farewell,
                &[
                    "bye", "goodbye", "see you", "farewell", "take care", "later", "quit", "exit",
                ],
                vec![
                    Reply::Text("Goodbye! It was nice chatting with you."),
                    Reply::Text("See you later! Have a great day!"),
                    Reply::Text("Take care! Feel free to come back anytime."),
                    Reply::Text("Farewell! Thanks for the conversation."),
                ],
            )?
            .terminal(),
            Rule::new(
                Topic::WellBeing,
                &["how are you", "how do you feel", "what's up", "how's it going"],
                vec![
                    Reply::Text("I'm doing great! Thanks for asking. How are you?"),
                    Reply::Text("I'm fantastic! Ready to help you with anything you need."),
                    Reply::Text("I'm doing well! What about you?"),
                    Reply::Text("All systems running smoothly! How can I assist you today?"),
                ],
            )?,
            Rule::new(
                Topic::Identity,
                &["what's your name", "who are you", "what are you called"],
                vec![
                    Reply::Text(
                        "I'm a simple chatbot created to demonstrate basic conversation patterns!",
                    ),
                    Reply::Text(
                        "You can call me ChatBot. I'm here to chat and help with simple questions.",
                    ),
                    Reply::Text("I'm your friendly neighborhood chatbot! What should I call you?"),
                ],
            )?,
            Rule::new(
                Topic::Weather,
                &[
                    "weather",
                    "rain",
                    "sunny",
                    "cloudy",
                    "temperature",
                    "hot",
                    "cold",
                    "snow",
                ],
                vec![
                    Reply::Text(
                        "I wish I could check the weather for you! Try looking outside or checking a weather app.",
                    ),
                    Reply::Text(
                        "I don't have access to real weather data, but I hope it's nice where you are!",
                    ),
                    Reply::Text(
                        "Weather is always a great conversation starter! What's it like where you are?",
                    ),
                ],
            )?,
            Rule::new(
                Topic::Time,
                &["time", "clock", "what time", "when", "date", "today"],
                vec![
                    Reply::Clock(current_time),
                    Reply::Clock(date_and_time),
                    Reply::Text("Time flies when you're having a good conversation!"),
                ],
            )?,
            Rule::new(
                Topic::MathTalk,
                &["calculate", "math", "plus", "minus", "multiply", "divide"],
                vec![
                    Reply::Text(
                        "I can do simple math! Try asking me something like '5 + 3' or 'what is 10 times 2?'",
                    ),
                    Reply::Text("Math is fun! Give me a simple calculation and I'll try to help."),
                    Reply::Text("I love numbers! What would you like me to calculate?"),
                ],
            )?,
            Rule::new(
                Topic::Compliment,
                &[
                    "good", "great", "awesome", "amazing", "nice", "cool", "smart", "helpful",
                ],
                vec![
                    Reply::Text("Thank you! That's very kind of you to say."),
                    Reply::Text("I appreciate the compliment! You're pretty great yourself."),
                    Reply::Text("Aww, thanks! I try my best to be helpful."),
                    Reply::Text("You're making me blush! Well, if I could blush..."),
                ],
            )?,
            Rule::new(
                Topic::Capabilities,
                &["what can you do", "help", "capabilities", "features"],
                vec![
                    Reply::Text(
                        "I can chat with you, answer simple questions, do basic math, and respond to common conversation topics!",
                    ),
                    Reply::Text(
                        "I'm a simple chatbot that can have basic conversations. Try asking about weather, time, or just chat!",
                    ),
                    Reply::Text(
                        "I can respond to greetings, answer questions, do simple calculations, and have friendly conversations!",
                    ),
                ],
            )?,
            Rule::new(
                Topic::Thanks,
                &["thank you", "thanks", "appreciate"],
                vec![
                    Reply::Text("You're welcome! Happy to help."),
                    Reply::Text("No problem at all! Glad I could assist."),
                    Reply::Text("My pleasure! Feel free to ask anything else."),
                    Reply::Text("Anytime! That's what I'm here for."),
                ],
            )?,
        ];
        Ok(Self::new(rules))
    }

    /// Returns the first rule, in table order, matching anywhere in `input`.
    pub fn find_match(&self, input: &str) -> Option<&Rule> {
        let found = self.rules.iter().find(|rule| rule.matches(input));
        trace!(
            "Pattern table lookup for {:?}: {:?}",
            input,
            found.map(Rule::topic)
        );
        found
    }

    /// # Table Rules (`rules`)
    ///
    /// The rules in priority order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// # Rule Count (`len`)
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// # Is Empty (`is_empty`)
    ///
    /// ## Returns
    ///
    /// * `bool` - `true` if the table holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn current_time(now: DateTime<Local>) -> String {
    format!("The current time is {}", now.format("%I:%M %p"))
}

fn date_and_time(now: DateTime<Local>) -> String {
    format!(
        "Today is {}. The time is {}",
        now.format("%B %d, %Y"),
        now.format("%I:%M %p")
    )
}
