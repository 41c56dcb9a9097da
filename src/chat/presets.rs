//! Fixed persona, style and reply-length tables.
//!
//! Keys match exactly (case-sensitive). A miss is not an error: it resolves
//! to the table's fallback text.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::marker::PhantomData;

pub trait Preset: Copy + Sized + 'static {
    /// Every variant, in the order the table is published.
    const ALL: &'static [Self];
    /// Text used when a key is not in the table.
    const FALLBACK: &'static str;

    fn key(self) -> &'static str;
    fn instruction(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|preset| preset.key() == key)
    }

    fn lookup(key: &str) -> &'static str {
        Self::from_key(key).map_or(Self::FALLBACK, Self::instruction)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    Teacher,
    Friend,
    Advisor,
    Casual,
    Mentor,
}

impl Preset for Persona {
    const ALL: &'static [Self] = &[
        Persona::Teacher,
        Persona::Friend,
        Persona::Advisor,
        Persona::Casual,
        Persona::Mentor,
    ];
    const FALLBACK: &'static str = "You are a chatbot that speaks naturally.";

    fn key(self) -> &'static str {
        match self {
            Persona::Teacher => "Teacher",
            Persona::Friend => "Friend",
            Persona::Advisor => "Advisor",
            Persona::Casual => "Casual",
            Persona::Mentor => "Mentor",
        }
    }

    fn instruction(self) -> &'static str {
        match self {
            Persona::Teacher => "You are a teacher who explains things clearly.",
            Persona::Friend => "You are a friend who listens and supports the user.",
            Persona::Advisor => "You are an advisor who offers practical guidance.",
            Persona::Casual => "You are a chatbot that speaks naturally.",
            Persona::Mentor => "You are a career mentor who gives advice.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Formal,
    Friendly,
    Sarcastic,
    Poetic,
}

impl Preset for Style {
    const ALL: &'static [Self] = &[Style::Formal, Style::Friendly, Style::Sarcastic, Style::Poetic];
    const FALLBACK: &'static str = "";

    fn key(self) -> &'static str {
        match self {
            Style::Formal => "Formal",
            Style::Friendly => "Friendly",
            Style::Sarcastic => "Sarcastic",
            Style::Poetic => "Poetic",
        }
    }

    fn instruction(self) -> &'static str {
        match self {
            Style::Formal => "Speak politely and use professional language.",
            Style::Friendly => "Speak warmly and casually with emojis 😊.",
            Style::Sarcastic => "Use light sarcasm and humor 😏.",
            Style::Poetic => "Respond creatively and use expressive language 🎭.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyLength {
    Detailed,
    Short,
}

impl Preset for ReplyLength {
    const ALL: &'static [Self] = &[ReplyLength::Detailed, ReplyLength::Short];
    const FALLBACK: &'static str = "";

    fn key(self) -> &'static str {
        match self {
            ReplyLength::Detailed => "Detailed",
            ReplyLength::Short => "Short",
        }
    }

    fn instruction(self) -> &'static str {
        match self {
            ReplyLength::Detailed => "Give a detailed answer with explanation of 5–6 lines.",
            ReplyLength::Short => "Give a concise answer not more than 2 lines.",
        }
    }
}

/// Serializes a preset table as a `key -> instruction` JSON object in
/// declaration order.
pub struct PresetTable<P>(PhantomData<P>);

pub fn table<P: Preset>() -> PresetTable<P> {
    PresetTable(PhantomData)
}

impl<P: Preset> Serialize for PresetTable<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(P::ALL.len()))?;
        for preset in P::ALL {
            map.serialize_entry(preset.key(), preset.instruction())?;
        }
        map.end()
    }
}
