//! Noun inflection.
//!
//! `NounInflector` answers case/number queries for one `Noun`. Stored forms
//! are returned as-is unless `force_artificial` is set; otherwise the form is
//! derived by rule. Derivations never mutate the lemma.
//!
//! Every derivation returns `Result<Option<String>, InflectionError>`:
//! `Ok(None)` means "no answer" (the slot does not exist for this lemma),
//! `Err` means the lemma is missing a form the rules must start from.

use crate::config::GrammarConfig;
use crate::error::InflectionError;
use crate::kompositum::CompoundSegmenter;
use crate::plural_rules::{plural_rule_match, RuleMatch};
use flexion_core::strings::{ends_with_any, eq_folded, fold, try_eat_back};
use flexion_core::{first_form, Case, Dictionary, Noun, NounClass, Number, Word};

/// Derivation result: `Ok(None)` is "no answer".
pub type Derived = Result<Option<String>, InflectionError>;

pub struct NounInflector<'a> {
    noun: &'a Noun,
    dict: &'a Dictionary,
    config: &'a GrammarConfig,
}

impl<'a> NounInflector<'a> {
    pub fn new(noun: &'a Noun, dict: &'a Dictionary, config: &'a GrammarConfig) -> Self {
        Self { noun, dict, config }
    }

    pub fn noun(&self) -> &'a Noun {
        self.noun
    }

    fn stored(&self, case: Case, number: Number) -> Option<&'a str> {
        first_form(self.noun.forms(case, number))
    }

    fn missing(&self, slot: &'static str) -> InflectionError {
        let lemma = self
            .noun
            .cases
            .iter()
            .find(|s| !s.is_empty())
            .unwrap_or_default()
            .to_string();
        InflectionError::MissingRequiredForm { lemma, slot }
    }

    /// The stored nominative singular every rule starts from.
    fn singular(&self) -> Result<Option<&'a str>, InflectionError> {
        if self.noun.no_singular {
            return Ok(None);
        }
        match self.stored(Case::Nominative, Number::Singular) {
            Some(s) => Ok(Some(s)),
            None => Err(self.missing("nominative singular")),
        }
    }

    pub fn nominative_singular(&self) -> Derived {
        Ok(self.singular()?.map(str::to_string))
    }

    /// Nominative plural, recomposing compounds from their head's plural.
    pub fn nominative_plural(&self, force_artificial: bool) -> Derived {
        if self.noun.no_plural {
            return Ok(None);
        }
        if !force_artificial {
            if let Some(p) = self.stored(Case::Nominative, Number::Plural) {
                return Ok(Some(p.to_string()));
            }
        }
        let Some(singular) = self.singular()? else {
            return Ok(None);
        };

        let mut parts = CompoundSegmenter::new(self.dict, self.config).split(singular);
        if parts.len() >= 2 {
            if let Some(head) = parts.pop() {
                if let Some(head_plural) = self.head_plural(&head, force_artificial) {
                    let mut out = parts.concat();
                    out.push_str(&fold(&head_plural));
                    return Ok(Some(out));
                }
            }
        }
        self.plural_without_dictionary(force_artificial)
    }

    /// Plural of the first dictionary noun whose nominative singular is
    /// `head`. Structural errors in that lemma are logged and ignored.
    fn head_plural(&self, head: &str, force_artificial: bool) -> Option<String> {
        let noun = self.dict.find(head).into_iter().find_map(|word| match word {
            Word::Noun(n) if n.cases.nominative.singular.iter().any(|s| eq_folded(s, head)) => {
                Some(n)
            }
            _ => None,
        })?;
        match NounInflector::new(noun, self.dict, self.config)
            .plural_without_dictionary(force_artificial)
        {
            Ok(plural) => plural,
            Err(e) => {
                tracing::warn!(head = %head, error = %e, "compound head has no usable plural");
                None
            }
        }
    }

    /// Nominative plural from the stored form or the rule cascade alone.
    pub fn plural_without_dictionary(&self, force_artificial: bool) -> Derived {
        if self.noun.no_plural {
            return Ok(None);
        }
        if !force_artificial {
            if let Some(p) = self.stored(Case::Nominative, Number::Plural) {
                return Ok(Some(p.to_string()));
            }
        }
        Ok(self.plural_rule_match()?.map(|m| m.form))
    }

    /// The plural rule that fires for this noun's singular.
    pub fn plural_rule_match(&self) -> Result<Option<RuleMatch>, InflectionError> {
        Ok(self
            .singular()?
            .map(|s| plural_rule_match(s, self.noun.gender, self.config)))
    }

    pub fn genitive_singular(&self, force_artificial: bool) -> Derived {
        if self.noun.no_singular {
            return Ok(None);
        }
        if !force_artificial {
            if let Some(g) = self.stored(Case::Genitive, Number::Singular) {
                return Ok(Some(g.to_string()));
            }
        }
        self.genitive_by_rules(force_artificial)
    }

    /// Genitive singular cascade keyed on the noun class.
    pub fn genitive_by_rules(&self, force_artificial: bool) -> Derived {
        let Some(s) = self.singular()? else {
            return Ok(None);
        };
        let gender = self.noun.gender;
        let sibilant = self.config.ends_with_sibilant(s);

        let form = match self.noun.class {
            NounClass::Name if sibilant => format!("{s}'"),
            NounClass::Name => format!("{s}s"),
            NounClass::Toponym if gender.admits_feminine() || sibilant => s.to_string(),
            NounClass::Toponym if gender.admits_masculine() || gender.admits_neuter() => {
                format!("{s}s")
            }
            NounClass::Numeral => s.to_string(),
            NounClass::Toponym | NounClass::Common | NounClass::Incomplete => {
                self.common_genitive(s, force_artificial)?
            }
        };
        Ok(Some(form))
    }

    fn common_genitive(&self, s: &str, force_artificial: bool) -> Result<String, InflectionError> {
        let gender = self.noun.gender;
        if ends_with_any(s, &["ismus", "os"])
            || (s.ends_with("us") && !ends_with_any(s, &["aus", "eus"]))
        {
            return Ok(s.to_string());
        }
        if !(gender.admits_masculine() || gender.admits_neuter()) {
            return Ok(s.to_string());
        }

        let mut stem = s.to_string();
        if self.is_n_declension(force_artificial)? {
            try_eat_back(&mut stem, "e");
            stem.push_str("en");
        } else if ends_with_any(s, &self.config.vowels) || s.ends_with('h') {
            stem.push('s');
        } else if s.ends_with("is") && !ends_with_any(s, &["eis", "ais"]) {
            stem.push_str("ses");
        } else if self.config.ends_with_sibilant(s) || ends_with_any(s, &["sch", "st", "zt"]) {
            stem.push_str("es");
        } else {
            stem.push('s');
        }
        Ok(stem)
    }

    pub fn genitive_plural(&self, force_artificial: bool) -> Derived {
        self.plural_slot(Case::Genitive, force_artificial)
    }

    pub fn accusative_plural(&self, force_artificial: bool) -> Derived {
        self.plural_slot(Case::Accusative, force_artificial)
    }

    /// Stored plural of `case`, else the unforced nominative plural.
    fn plural_slot(&self, case: Case, force_artificial: bool) -> Derived {
        if self.noun.no_plural {
            return Ok(None);
        }
        if !force_artificial {
            if let Some(p) = self.stored(case, Number::Plural) {
                return Ok(Some(p.to_string()));
            }
        }
        self.nominative_plural(false)
    }

    pub fn dative_singular(&self, force_artificial: bool) -> Derived {
        if self.noun.no_singular {
            return Ok(None);
        }
        if !force_artificial {
            if let Some(d) = self.stored(Case::Dative, Number::Singular) {
                return Ok(Some(d.to_string()));
            }
        }
        let Some(s) = self.singular()? else {
            return Ok(None);
        };

        if self.noun.gender.admits_masculine() && self.config.has_n_declension_suffix(s) {
            return Ok(Some(format!("{s}en")));
        }
        if ends_with_any(s, &["er", "ar", "är", "eur", "ier", "or"]) {
            return Ok(Some(s.to_string()));
        }
        if self.is_n_declension(false)? {
            if s.ends_with('e') {
                return Ok(Some(format!("{s}n")));
            }
            if !ends_with_any(s, &self.config.vowels) && !s.ends_with('n') {
                return Ok(Some(format!("{s}en")));
            }
        }
        Ok(Some(s.to_string()))
    }

    pub fn dative_plural(&self, force_artificial: bool) -> Derived {
        if self.noun.no_plural {
            return Ok(None);
        }
        if !force_artificial {
            if let Some(d) = self.stored(Case::Dative, Number::Plural) {
                return Ok(Some(d.to_string()));
            }
        }
        Ok(self.nominative_plural(false)?.map(|mut plural| {
            if takes_dative_n(&plural) {
                plural.push('n');
            }
            plural
        }))
    }

    pub fn accusative_singular(&self, force_artificial: bool) -> Derived {
        if self.noun.no_singular {
            return Ok(None);
        }
        if !force_artificial {
            if let Some(a) = self.stored(Case::Accusative, Number::Singular) {
                return Ok(Some(a.to_string()));
            }
        }
        self.dative_singular(false)
    }

    /// Whether the noun follows the weak (n-) declension.
    ///
    /// Unless forced, a noun with all eight slots filled is judged by its
    /// stored forms; otherwise by gender and ending.
    pub fn is_n_declension(&self, force_artificial: bool) -> Result<bool, InflectionError> {
        let gender = self.noun.gender;
        if gender.admits_feminine() {
            return Ok(false);
        }
        let Some(s) = self.singular()? else {
            return Ok(false);
        };
        if gender.admits_neuter() {
            return Ok(self.config.n_declension_exceptions.iter().any(|e| e == s));
        }
        if s.ends_with("en") {
            return Ok(false);
        }

        let cases = &self.noun.cases;
        let complete = Case::ALL.iter().all(|c| {
            !cases.forms(*c, Number::Singular).is_empty()
                && !cases.forms(*c, Number::Plural).is_empty()
        });
        if !force_artificial && complete {
            let weak = Case::ALL.iter().all(|c| {
                let singular_ok = cases.forms(*c, Number::Singular).iter().all(|f| {
                    f.ends_with('n') || (*c == Case::Genitive && f.ends_with("ns"))
                });
                let plural_ok = cases.forms(*c, Number::Plural).iter().all(|f| f.ends_with('n'));
                singular_ok && plural_ok
            });
            return Ok(weak);
        }

        let masculine = gender.admits_masculine();
        Ok(masculine
            && ((s.ends_with('e') && !s.ends_with("ie")) || self.config.has_n_declension_suffix(s)))
    }

    pub fn get(&self, case: Case, number: Number, force_artificial: bool) -> Derived {
        match (case, number) {
            (Case::Nominative, Number::Singular) => self.nominative_singular(),
            (Case::Nominative, Number::Plural) => self.nominative_plural(force_artificial),
            (Case::Genitive, Number::Singular) => self.genitive_singular(force_artificial),
            (Case::Genitive, Number::Plural) => self.genitive_plural(force_artificial),
            (Case::Dative, Number::Singular) => self.dative_singular(force_artificial),
            (Case::Dative, Number::Plural) => self.dative_plural(force_artificial),
            (Case::Accusative, Number::Singular) => self.accusative_singular(force_artificial),
            (Case::Accusative, Number::Plural) => self.accusative_plural(force_artificial),
        }
    }

    /// True if the slot's first stored form is non-empty.
    pub fn predefined(&self, case: Case, number: Number) -> bool {
        self.stored(case, number).is_some()
    }

    /// Whether `word` is an acceptable form for the slot. Stored alternates
    /// are checked first; an empty slot is compared with the derived form.
    pub fn test(&self, case: Case, number: Number, word: &str) -> Result<bool, InflectionError> {
        match (case, number) {
            (Case::Nominative, Number::Singular) => Ok(self.is_nominative_singular(word)),
            (Case::Nominative, Number::Plural) => self.is_nominative_plural(word),
            (Case::Genitive, Number::Singular) => self.is_genitive_singular(word),
            (Case::Genitive, Number::Plural) => self.is_plural_slot(Case::Genitive, word),
            (Case::Dative, Number::Singular) => {
                self.is_singular_slot(Case::Dative, word, || self.dative_singular(false))
            }
            (Case::Dative, Number::Plural) => self.is_dative_plural(word),
            (Case::Accusative, Number::Singular) => {
                self.is_singular_slot(Case::Accusative, word, || self.accusative_singular(false))
            }
            (Case::Accusative, Number::Plural) => self.is_plural_slot(Case::Accusative, word),
        }
    }

    fn stored_contains(&self, case: Case, number: Number, word: &str) -> bool {
        self.noun
            .forms(case, number)
            .iter()
            .any(|f| eq_folded(f, word))
    }

    fn slot_empty(&self, case: Case, number: Number) -> bool {
        self.noun.forms(case, number).is_empty()
    }

    fn derived_equals(derived: Derived, word: &str) -> Result<bool, InflectionError> {
        Ok(derived?.is_some_and(|d| eq_folded(&d, word)))
    }

    pub fn is_nominative_singular(&self, word: &str) -> bool {
        !self.noun.no_singular && self.stored_contains(Case::Nominative, Number::Singular, word)
    }

    pub fn is_nominative_plural(&self, word: &str) -> Result<bool, InflectionError> {
        if self.noun.no_plural {
            return Ok(false);
        }
        if self.stored_contains(Case::Nominative, Number::Plural, word) {
            return Ok(true);
        }
        if self.slot_empty(Case::Nominative, Number::Plural) {
            return Self::derived_equals(self.nominative_plural(false), word);
        }
        Ok(false)
    }

    /// Genitive singular membership. Besides the derived form this accepts
    /// the bare singular and "-s", or the "-es"/weak forms where they apply.
    pub fn is_genitive_singular(&self, word: &str) -> Result<bool, InflectionError> {
        if self.noun.no_singular {
            return Ok(false);
        }
        if self.stored_contains(Case::Genitive, Number::Singular, word) {
            return Ok(true);
        }
        if !self.slot_empty(Case::Genitive, Number::Singular) {
            return Ok(false);
        }
        let Some(s) = self.singular()? else {
            return Ok(false);
        };
        let s = fold(s);
        let word = fold(word);
        let gender = self.noun.gender;

        if self.is_n_declension(false)? {
            return Ok(if s.ends_with('e') {
                format!("{s}n") == word
            } else {
                format!("{s}en") == word
            });
        }
        if (gender.admits_neuter() || gender.admits_masculine())
            && self.config.ends_with_sibilant(&s)
        {
            return Ok(format!("{s}es") == word);
        }
        if Self::derived_equals(self.genitive_singular(false), &word)? {
            return Ok(true);
        }
        Ok(s == word || format!("{s}s") == word)
    }

    fn is_plural_slot(&self, case: Case, word: &str) -> Result<bool, InflectionError> {
        if self.noun.no_plural {
            return Ok(false);
        }
        if self.stored_contains(case, Number::Plural, word) {
            return Ok(true);
        }
        if self.slot_empty(case, Number::Plural) {
            return self.is_nominative_plural(word);
        }
        Ok(false)
    }

    fn is_singular_slot<F>(
        &self,
        case: Case,
        word: &str,
        derive: F,
    ) -> Result<bool, InflectionError>
    where
        F: FnOnce() -> Derived,
    {
        if self.noun.no_singular {
            return Ok(false);
        }
        if self.stored_contains(case, Number::Singular, word) {
            return Ok(true);
        }
        if self.slot_empty(case, Number::Singular) {
            return Self::derived_equals(derive(), word);
        }
        Ok(false)
    }

    /// Dative plural membership. When the plural takes a dative "-n" the
    /// word must carry it.
    pub fn is_dative_plural(&self, word: &str) -> Result<bool, InflectionError> {
        if self.noun.no_plural {
            return Ok(false);
        }
        if self.stored_contains(Case::Dative, Number::Plural, word) {
            return Ok(true);
        }
        if !self.slot_empty(Case::Dative, Number::Plural) {
            return Ok(false);
        }
        let Some(plural) = self.nominative_plural(false)? else {
            return Ok(false);
        };
        if takes_dative_n(&plural) {
            return Ok(fold(word).ends_with('n') && eq_folded(&format!("{plural}n"), word));
        }
        self.is_nominative_plural(word)
    }
}

fn takes_dative_n(plural: &str) -> bool {
    ends_with_any(plural, &["e", "er", "el", "erl"]) && !plural.ends_with("ae")
}
