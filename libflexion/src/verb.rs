//! Verb inflection.
//!
//! Only retrieval is implemented for most slots: the present indicative first
//! person singular must be stored, other persons come back when stored and
//! are otherwise "no answer". There is no generative rule for them.

use crate::error::InflectionError;
use crate::noun::Derived;
use flexion_core::strings::eq_folded;
use flexion_core::{first_form, Mode, Number, Person, Tempus, Verb, Verbspec};

pub struct VerbInflector<'a> {
    verb: &'a Verb,
}

impl<'a> VerbInflector<'a> {
    pub fn new(verb: &'a Verb) -> Self {
        Self { verb }
    }

    pub fn verb(&self) -> &'a Verb {
        self.verb
    }

    fn lemma(&self) -> String {
        first_form(&self.verb.present_infinitive)
            .unwrap_or_default()
            .to_string()
    }

    /// Present indicative, first person singular. Required for every verb.
    pub fn first_singular(&self) -> Result<String, InflectionError> {
        first_form(&self.verb.present.first.singular)
            .map(str::to_string)
            .ok_or_else(|| InflectionError::MissingRequiredForm {
                lemma: self.lemma(),
                slot: "present indicative 1st singular",
            })
    }

    pub fn present_indicative(
        &self,
        person: Person,
        number: Number,
        force_artificial: bool,
    ) -> Derived {
        let forms = match person {
            Person::First if number == Number::Singular => return self.first_singular().map(Some),
            Person::First => &self.verb.present.first,
            Person::Second => &self.verb.present.second,
            Person::Third => &self.verb.present.third,
            Person::Polite | Person::Majestic => return Ok(None),
            Person::Any => {
                return Err(InflectionError::UnsupportedSpec(Verbspec::present(
                    person, number,
                )))
            }
        };
        if force_artificial {
            return Ok(None);
        }
        Ok(first_form(forms.get(number)).map(str::to_string))
    }

    /// The form addressed by `spec`. Indicative present goes through
    /// [`VerbInflector::present_indicative`]; every other slot is retrieval.
    pub fn get(&self, spec: &Verbspec, force_artificial: bool) -> Derived {
        if spec.mode == Mode::Indicative && spec.tempus == Tempus::Present {
            let Some(number) = spec.number.number() else {
                return Err(InflectionError::UnsupportedSpec(*spec));
            };
            if spec.person == Person::Any {
                return Err(InflectionError::UnsupportedSpec(*spec));
            }
            return self.present_indicative(spec.person, number, force_artificial);
        }
        if force_artificial {
            return Ok(None);
        }
        Ok(self
            .verb
            .slot(spec)
            .and_then(|forms| first_form(forms))
            .map(str::to_string))
    }

    /// Case-insensitive membership in the addressed slot; an empty slot is
    /// compared with the unforced form.
    pub fn test(&self, spec: &Verbspec, word: &str) -> Result<bool, InflectionError> {
        match self.verb.slot(spec) {
            Some(forms) if !forms.is_empty() => Ok(forms.iter().any(|f| eq_folded(f, word))),
            _ => Ok(self.get(spec, false)?.is_some_and(|d| eq_folded(&d, word))),
        }
    }

    /// True if the addressed slot exists and its first form is non-empty.
    pub fn predefined(&self, spec: &Verbspec) -> bool {
        self.verb
            .slot(spec)
            .is_some_and(|forms| first_form(forms).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexion_core::NumberSpec;

    fn gehe() -> Verb {
        let mut v = Verb::new("gehen");
        v.present.first.singular.push("gehe".into());
        v
    }

    #[test]
    fn first_singular_is_stored_form() {
        let v = gehe();
        let inf = VerbInflector::new(&v);
        let spec = Verbspec::present(Person::First, Number::Singular);
        assert_eq!(inf.get(&spec, false).unwrap().as_deref(), Some("gehe"));
        assert_eq!(inf.get(&spec, true).unwrap().as_deref(), Some("gehe"));
        assert!(inf.predefined(&spec));
        assert!(inf.test(&spec, "Gehe").unwrap());
    }

    #[test]
    fn other_persons_have_no_rule() {
        let v = gehe();
        let inf = VerbInflector::new(&v);
        let second = Verbspec::present(Person::Second, Number::Singular);
        assert_eq!(inf.get(&second, false).unwrap(), None);
        assert!(!inf.predefined(&second));
        assert!(!inf.test(&second, "gehst").unwrap());

        let polite = Verbspec::present(Person::Polite, Number::Plural);
        assert_eq!(inf.get(&polite, false).unwrap(), None);
    }

    #[test]
    fn stored_other_persons_unless_forced() {
        let mut v = gehe();
        let spec = Verbspec::present(Person::Third, Number::Singular);
        assert!(v.set(&spec, "geht"));
        let inf = VerbInflector::new(&v);
        assert_eq!(inf.get(&spec, false).unwrap().as_deref(), Some("geht"));
        assert_eq!(inf.get(&spec, true).unwrap(), None);
        assert!(inf.test(&spec, "GEHT").unwrap());
    }

    #[test]
    fn missing_first_singular_is_structural() {
        let v = Verb::new("gehen");
        let inf = VerbInflector::new(&v);
        let spec = Verbspec::present(Person::First, Number::Singular);
        assert_eq!(
            inf.get(&spec, false).unwrap_err(),
            InflectionError::MissingRequiredForm {
                lemma: "gehen".into(),
                slot: "present indicative 1st singular"
            }
        );
    }

    #[test]
    fn wildcards_are_rejected_for_present() {
        let v = gehe();
        let inf = VerbInflector::new(&v);
        let spec = Verbspec::new(
            Mode::Indicative,
            Tempus::Present,
            Person::Any,
            NumberSpec::Singular,
        );
        assert_eq!(inf.get(&spec, false), Err(InflectionError::UnsupportedSpec(spec)));
        let spec = Verbspec::new(Mode::Indicative, Tempus::Present, Person::First, NumberSpec::Any);
        assert!(matches!(inf.get(&spec, false), Err(InflectionError::UnsupportedSpec(_))));
    }

    #[test]
    fn retrieval_slots() {
        let mut v = gehe();
        v.participle_ii.push("gegangen".into());
        let inf = VerbInflector::new(&v);
        let participle = inf.get(&Verbspec::participle_ii(), false).unwrap();
        assert_eq!(participle.as_deref(), Some("gegangen"));
        assert_eq!(inf.get(&Verbspec::participle_ii(), true).unwrap(), None);
        assert!(inf.test(&Verbspec::infinitive(), "Gehen").unwrap());
        assert!(!inf.predefined(&Verbspec::imperative(Number::Singular)));
    }
}
