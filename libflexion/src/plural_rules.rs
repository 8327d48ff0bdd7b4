//! Nominative plural rule table.
//!
//! Rules are tried in table order and the first whose gender gate and
//! condition match (and whose transform produces a form) wins. The last three
//! rules have no condition, so every singular gets a plural.
//!
//! Rules match the stored singular as written; only the syllable count looks
//! at the lowercase form.

use crate::config::GrammarConfig;
use flexion_core::strings::{ends_with_any, try_eat_back, try_eat_back_any, umlautify};
use flexion_core::Gender;
use std::fmt;

/// Group a rule belongs to, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleCategory {
    Special,
    Loanword,
    Strong,
    Weak,
    Advanced,
    Additional,
    Basic,
}

/// Genders a rule applies to. An unspecified gender passes every gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    Any,
    Masculine,
    Neuter,
    Feminine,
    MasculineOrNeuter,
}

impl Gate {
    pub fn admits(self, gender: Gender) -> bool {
        match self {
            Gate::Any => true,
            Gate::Masculine => gender.admits_masculine(),
            Gate::Neuter => gender.admits_neuter(),
            Gate::Feminine => gender.admits_feminine(),
            Gate::MasculineOrNeuter => gender.admits_masculine() || gender.admits_neuter(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    EndsWith(&'static [&'static str]),
    PrefixAndSuffix(&'static str, &'static str),
}

impl Condition {
    fn matches(self, word: &str) -> bool {
        match self {
            Condition::Always => true,
            Condition::EndsWith(suffixes) => ends_with_any(word, suffixes),
            Condition::PrefixAndSuffix(prefix, suffix) => {
                word.starts_with(prefix) && word.ends_with(suffix)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Plural equals the singular.
    Keep,
    Append(&'static str),
    /// Replace `from` with `to`; append `otherwise` if `from` is absent.
    ReplaceSuffix {
        from: &'static str,
        to: &'static str,
        otherwise: &'static str,
    },
    /// Strip the first listed suffix present (if any), then append.
    StripThenAppend(&'static [&'static str], &'static str),
    /// Like `StripThenAppend`, but yields nothing when no suffix was
    /// stripped so the cascade continues.
    StripOrFallThrough(&'static [&'static str], &'static str),
    /// Strip "ion" unless the word ends in "tion", then append "en".
    FeminineIon,
    /// Umlaut the stem of a one-syllable word, then append.
    UmlautIfMonosyllabic(&'static str),
}

impl Transform {
    fn apply(self, singular: &str, config: &GrammarConfig) -> Option<String> {
        let mut s = singular.to_string();
        match self {
            Transform::Keep => {}
            Transform::Append(suffix) => s.push_str(suffix),
            Transform::ReplaceSuffix { from, to, otherwise } => {
                if try_eat_back(&mut s, from) {
                    s.push_str(to);
                } else {
                    s.push_str(otherwise);
                }
            }
            Transform::StripThenAppend(strip, suffix) => {
                try_eat_back_any(&mut s, strip);
                s.push_str(suffix);
            }
            Transform::StripOrFallThrough(strip, suffix) => {
                if !try_eat_back_any(&mut s, strip) {
                    return None;
                }
                s.push_str(suffix);
            }
            Transform::FeminineIon => {
                if !s.ends_with("tion") {
                    try_eat_back(&mut s, "ion");
                } else {
                    try_eat_back_any(&mut s, &["a", "um"]);
                }
                s.push_str("en");
            }
            Transform::UmlautIfMonosyllabic(suffix) => {
                if config.syllables(&s) <= 1 {
                    s = umlautify(&s);
                }
                s.push_str(suffix);
            }
        }
        Some(s)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct PluralRule {
    pub category: RuleCategory,
    pub gate: Gate,
    pub condition: Condition,
    pub transform: Transform,
    pub label: &'static str,
}

impl fmt::Display for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}: {}", self.category, self.gate, self.label)
    }
}

/// The plural a rule produced, with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub form: String,
    pub rule: &'static PluralRule,
}

const fn rule(
    category: RuleCategory,
    gate: Gate,
    condition: Condition,
    transform: Transform,
    label: &'static str,
) -> PluralRule {
    PluralRule {
        category,
        gate,
        condition,
        transform,
        label,
    }
}

use Condition::{Always, EndsWith, PrefixAndSuffix};
use Gate::{Any, Feminine, Masculine, MasculineOrNeuter, Neuter};
use RuleCategory::*;
use Transform::*;

pub static PLURAL_RULES: &[PluralRule] = &[
    rule(Special, Any, PrefixAndSuffix("Ge", "e"), Keep, "Ge-…-e collective"),
    rule(
        Loanword,
        Any,
        EndsWith(&["ismus"]),
        ReplaceSuffix {
            from: "ismus",
            to: "ismen",
            otherwise: "",
        },
        "-ismus → -ismen",
    ),
    rule(Loanword, Any, EndsWith(&["y", "ck"]), Append("s"), "English -y/-ck"),
    rule(Loanword, Any, EndsWith(&["é"]), Append("s"), "French -é"),
    rule(Strong, Masculine, EndsWith(&["loge"]), Append("n"), "-loge"),
    rule(
        Strong,
        Feminine,
        EndsWith(&["ade", "age", "euse", "elle", "ie", "ine", "isse", "ive", "ose"]),
        Append("n"),
        "feminine loan -e",
    ),
    rule(
        Strong,
        Masculine,
        EndsWith(&["chen", "iker", "lein", "ler", "men", "ner", "sel"]),
        Keep,
        "masculine zero plural",
    ),
    rule(
        Strong,
        Masculine,
        EndsWith(&["and", "ant", "ent", "ismus", "ist", "it", "nom", "os", "soph"]),
        StripThenAppend(&["us", "os"], "en"),
        "masculine weak loan",
    ),
    rule(Strong, Neuter, EndsWith(&["os"]), StripThenAppend(&["os"], "en"), "neuter -os"),
    rule(
        Strong,
        Neuter,
        EndsWith(&["tum"]),
        ReplaceSuffix {
            from: "tum",
            to: "tümer",
            otherwise: "er",
        },
        "-tum → -tümer",
    ),
    rule(
        Strong,
        MasculineOrNeuter,
        EndsWith(&[
            "al", "är", "an", "ar", "ell", "eur", "iv", "il", "ling", "nis", "onym", "sal",
        ]),
        ReplaceSuffix {
            from: "nis",
            to: "nisse",
            otherwise: "e",
        },
        "strong -e",
    ),
    rule(
        Strong,
        Feminine,
        EndsWith(&[
            "anz", "enz", "heit", "igkeit", "ik", "in", "keit", "schaft", "tät", "ung", "ur",
        ]),
        StripThenAppend(&["a", "um"], "en"),
        "feminine abstract",
    ),
    rule(Strong, Feminine, EndsWith(&["nis"]), Append("se"), "feminine -nis"),
    rule(Strong, Masculine, EndsWith(&["on"]), Append("s"), "stressed -on"),
    rule(Weak, Masculine, EndsWith(&["ier"]), Keep, "masculine -ier"),
    rule(
        Weak,
        Masculine,
        EndsWith(&["ekt", "at", "et", "on", "or", "us"]),
        StripThenAppend(&["us"], "en"),
        "masculine weak",
    ),
    rule(
        Weak,
        Neuter,
        EndsWith(&["ion", "ma", "um", "ut"]),
        StripOrFallThrough(&["a", "on", "um"], "en"),
        "neuter Latin/Greek",
    ),
    rule(
        Weak,
        MasculineOrNeuter,
        EndsWith(&[
            "at", "ekt", "et", "ett", "ier", "in", "ion", "ix", "ling", "ment", "or", "on", "ut",
        ]),
        Append("e"),
        "weak -e",
    ),
    rule(Weak, Feminine, EndsWith(&["ion"]), FeminineIon, "feminine -ion"),
    rule(
        Weak,
        Neuter,
        EndsWith(&["et", "ie", "ier", "in", "ment", "or"]),
        Append("s"),
        "neuter stressed ending",
    ),
    rule(Weak, Feminine, EndsWith(&["ie"]), Append("s"), "feminine -ie"),
    rule(
        Advanced,
        MasculineOrNeuter,
        EndsWith(&["el", "er", "en"]),
        Keep,
        "unstressed -el/-er/-en",
    ),
    rule(Advanced, Feminine, EndsWith(&["el", "er"]), Append("n"), "feminine -el/-er"),
    rule(Additional, Feminine, EndsWith(&["ee", "ie", "ei"]), Append("n"), "feminine -ee/-ie/-ei"),
    rule(Additional, Any, EndsWith(&["e"]), Append("n"), "-e"),
    rule(Additional, Any, EndsWith(&["a", "o", "i", "u"]), Append("s"), "full vowel"),
    rule(Basic, Masculine, Always, UmlautIfMonosyllabic("e"), "masculine default"),
    rule(Basic, Neuter, Always, Append("er"), "neuter default"),
    rule(Basic, Any, Always, Append("en"), "feminine default"),
];

/// Run the cascade on a nominative singular.
pub fn plural_rule_match(singular: &str, gender: Gender, config: &GrammarConfig) -> RuleMatch {
    for rule in PLURAL_RULES {
        if !rule.gate.admits(gender) || !rule.condition.matches(singular) {
            continue;
        }
        if let Some(form) = rule.transform.apply(singular, config) {
            return RuleMatch { form, rule };
        }
    }
    // The basic rules are unconditional and their last gate is `Any`.
    let fallback = &PLURAL_RULES[PLURAL_RULES.len() - 1];
    RuleMatch {
        form: format!("{singular}en"),
        rule: fallback,
    }
}

/// Shorthand for the plural form alone.
pub fn plural_by_rules(singular: &str, gender: Gender, config: &GrammarConfig) -> String {
    plural_rule_match(singular, gender, config).form
}
