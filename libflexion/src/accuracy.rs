//! Accuracy measurement against stored forms.
//!
//! For every lemma whose slot is predefined, the form is derived with
//! `force_artificial = true` and checked with the slot's membership test.
//! Lemmas the rules cannot handle structurally are skipped with a warning.

use crate::error::InflectionError;
use crate::grammar::Grammar;
use crate::noun::NounInflector;
use crate::verb::VerbInflector;
use flexion_core::{first_form, Case, Number, Verbspec};

/// A lemma whose derived form failed the membership test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub lemma: String,
    pub stored: String,
    /// Empty when the rules gave no answer.
    pub derived: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccuracyReport {
    pub sampled: usize,
    pub wrong: usize,
    pub mismatches: Vec<Mismatch>,
}

impl AccuracyReport {
    /// Share of wrong derivations in percent; 0 when nothing was sampled.
    pub fn error_rate(&self) -> f64 {
        if self.sampled == 0 {
            return 0.0;
        }
        self.wrong as f64 * 100.0 / self.sampled as f64
    }

    fn record(&mut self, ok: bool, lemma: &str, stored: &str, derived: Option<String>) {
        self.sampled += 1;
        if !ok {
            self.wrong += 1;
            self.mismatches.push(Mismatch {
                lemma: lemma.to_string(),
                stored: stored.to_string(),
                derived: derived.unwrap_or_default(),
            });
        }
    }

    fn full(&self, limit: Option<usize>) -> bool {
        limit.is_some_and(|l| self.sampled >= l)
    }
}

/// Measure one noun slot over the dictionary, stopping after `limit`
/// sampled lemmas.
pub fn measure_nouns(
    grammar: &Grammar,
    case: Case,
    number: Number,
    limit: Option<usize>,
) -> AccuracyReport {
    let mut report = AccuracyReport::default();
    for noun in grammar.dictionary().nouns() {
        if report.full(limit) {
            break;
        }
        let inflector = grammar.noun(noun);
        if !inflector.predefined(case, number) {
            continue;
        }
        let lemma = first_form(&noun.cases.nominative.singular).unwrap_or_default();
        let stored = first_form(noun.forms(case, number)).unwrap_or_default();

        match check_noun(&inflector, case, number) {
            Ok((ok, derived)) => report.record(ok, lemma, stored, derived),
            Err(e) => tracing::warn!(lemma = %lemma, error = %e, "skipping noun"),
        }
    }
    tracing::info!(
        ?case,
        ?number,
        sampled = report.sampled,
        wrong = report.wrong,
        "measured noun slot"
    );
    report
}

/// Measure one verb slot over the dictionary.
pub fn measure_verbs(grammar: &Grammar, spec: &Verbspec, limit: Option<usize>) -> AccuracyReport {
    let mut report = AccuracyReport::default();
    for verb in grammar.dictionary().verbs() {
        if report.full(limit) {
            break;
        }
        let inflector = grammar.verb(verb);
        if !inflector.predefined(spec) {
            continue;
        }
        let lemma = first_form(&verb.present_infinitive).unwrap_or_default();
        let stored = verb
            .slot(spec)
            .and_then(|forms| first_form(forms))
            .unwrap_or_default();

        match check_verb(&inflector, spec) {
            Ok((ok, derived)) => report.record(ok, lemma, stored, derived),
            Err(e) => tracing::warn!(lemma = %lemma, error = %e, "skipping verb"),
        }
    }
    tracing::info!(%spec, sampled = report.sampled, wrong = report.wrong, "measured verb slot");
    report
}

type Checked = Result<(bool, Option<String>), InflectionError>;

fn check_noun(inflector: &NounInflector<'_>, case: Case, number: Number) -> Checked {
    let derived = inflector.get(case, number, true)?;
    let ok = match &derived {
        Some(d) => inflector.test(case, number, d)?,
        None => false,
    };
    Ok((ok, derived))
}

fn check_verb(inflector: &VerbInflector<'_>, spec: &Verbspec) -> Checked {
    let derived = inflector.get(spec, true)?;
    let ok = match &derived {
        Some(d) => inflector.test(spec, d)?,
        None => false,
    };
    Ok((ok, derived))
}

/// Decompositions of nouns whose singular has more than `min_chars`
/// characters, for eyeballing the segmenter.
pub fn segment_long_nouns(
    grammar: &Grammar,
    min_chars: usize,
    limit: usize,
) -> Vec<(String, Vec<String>)> {
    let segmenter = grammar.segmenter();
    grammar
        .dictionary()
        .nouns()
        .iter()
        .filter_map(|noun| first_form(&noun.cases.nominative.singular))
        .filter(|singular| singular.chars().count() > min_chars)
        .take(limit)
        .map(|singular| (singular.to_string(), segmenter.split(singular)))
        .collect()
}
