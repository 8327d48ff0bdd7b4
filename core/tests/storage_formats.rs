//! Dictionary and configuration storage formats

#[cfg(test)]
mod tests {
    use flexion_core::{
        Adjective, Case, Config, CoreError, Dictionary, Gender, Noun, Number, Pronoun, PronounKind,
        Verb, Word, WordKind,
    };
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("flexion-core-{}-{}", std::process::id(), name))
    }

    fn sample() -> Dictionary {
        let mut d = Dictionary::new();
        d.add(
            Noun::new("Haus", Gender::NEUTER)
                .with_form(Case::Nominative, Number::Plural, "Häuser"),
        );
        d.add(
            Noun::new("Baum", Gender::MASCULINE)
                .with_form(Case::Nominative, Number::Plural, "Bäume"),
        );
        let mut gehen = Verb::new("gehen");
        gehen.present.first.singular.push("gehe".into());
        gehen.participle_ii.push("gegangen".into());
        d.add(gehen);
        d.add(Adjective::new("groß"));
        d.add(Pronoun::new("ich", PronounKind::Personal));
        d
    }

    #[test]
    fn test_config_toml_format() {
        let config = Config {
            max_payload_bytes: 1 << 20,
            simplify_on_load: true,
        };

        let toml_path = temp_path("config.toml");
        config.save_toml(&toml_path).expect("Failed to save TOML config");

        let loaded = Config::load_toml(&toml_path).expect("Failed to load TOML config");
        assert_eq!(config, loaded);

        let _ = fs::remove_file(&toml_path);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml_str("simplify_on_load = true").expect("parse");
        assert!(config.simplify_on_load);
        assert_eq!(config.max_payload_bytes, Config::default().max_payload_bytes);
    }

    #[test]
    fn test_bincode_dictionary_roundtrip() {
        let original = sample();
        let path = temp_path("dict.bincode");
        let config = Config::default();

        original.save_bincode(&path, &config).expect("Failed to save bincode");
        let loaded = Dictionary::load_bincode(&path, &config).expect("Failed to load bincode");

        assert_eq!(loaded.nouns(), original.nouns());
        assert_eq!(loaded.verbs(), original.verbs());
        assert_eq!(loaded.pronouns(), original.pronouns());
        assert!(!loaded.needs_rebuild());

        let found = loaded.lookup("GEGANGEN");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, WordKind::Verb);
        assert_eq!(loaded.find("häuser").len(), 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_json_dictionary_roundtrip() {
        let original = sample();
        let path = temp_path("dict.json");

        original.save_json(&path).expect("Failed to save JSON");
        let text = fs::read_to_string(&path).expect("read back");
        assert!(text.contains("\"Häuser\""));

        let loaded = Dictionary::load_json(&path, &Config::default()).expect("Failed to load JSON");
        assert_eq!(loaded.adjectives(), original.adjectives());
        assert_eq!(loaded.find("groß").len(), 1);
        assert_eq!(loaded.find("ich").len(), 1);

        let _ = fs::remove_file(&path);
    }

    fn nouns<'a>(found: &[Word<'a>]) -> Vec<Option<&'a Noun>> {
        found.iter().map(Word::as_noun).collect()
    }

    fn verbs<'a>(found: &[Word<'a>]) -> Vec<Option<&'a Verb>> {
        found.iter().map(Word::as_verb).collect()
    }

    fn assert_same_lookups(original: &Dictionary, loaded: &Dictionary) {
        let keys = original.index().keys();
        assert_eq!(keys, loaded.index().keys());
        for key in keys.iter().map(String::as_str).chain(["Katze", "GEHT"]) {
            assert_eq!(original.lookup(key), loaded.lookup(key), "lookup {key}");
            let (before, after) = (original.find(key), loaded.find(key));
            assert_eq!(nouns(&before), nouns(&after), "find {key}");
            assert_eq!(verbs(&before), verbs(&after), "find {key}");
        }
    }

    #[test]
    fn test_find_identical_after_roundtrip() {
        let mut original = Dictionary::new();
        original.add(
            Noun::new("Haus", Gender::NEUTER)
                .with_form(Case::Nominative, Number::Plural, "Häuser"),
        );
        original.add(
            Noun::new("Baum", Gender::MASCULINE)
                .with_form(Case::Nominative, Number::Plural, "Bäume"),
        );
        original.add(Noun::new("Gehen", Gender::NEUTER));
        let mut gehen = Verb::new("gehen");
        gehen.present.third.singular.push("geht".into());
        original.add(gehen);
        original.add(Verb::new("bauen"));
        original.build_map().expect("build index");

        let config = Config::default();
        let bin_path = temp_path("dict-find.bincode");
        original.save_bincode(&bin_path, &config).expect("save bincode");
        let from_bincode = Dictionary::load_bincode(&bin_path, &config).expect("load bincode");
        assert_same_lookups(&original, &from_bincode);

        let json_path = temp_path("dict-find.json");
        original.save_json(&json_path).expect("save json");
        let from_json = Dictionary::load_json(&json_path, &config).expect("load json");
        assert_same_lookups(&original, &from_json);

        // "gehen" is shared by a noun and a verb; both survive in order
        assert_eq!(from_json.lookup("gehen").len(), 2);

        let _ = fs::remove_file(&bin_path);
        let _ = fs::remove_file(&json_path);
    }

    #[test]
    fn test_simplify_on_load() {
        let mut d = sample();
        d.add(Noun::new("", Gender::default()));
        let path = temp_path("dict-simplify.bincode");
        let config = Config {
            simplify_on_load: true,
            ..Config::default()
        };

        d.save_bincode(&path, &config).expect("save");
        let loaded = Dictionary::load_bincode(&path, &config).expect("load");
        assert!(loaded
            .nouns()
            .iter()
            .all(|n| n.cases.nominative.singular.iter().all(|s| !s.is_empty())));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = temp_path("does-not-exist.bincode");
        let err = Dictionary::load_bincode(&path, &Config::default()).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
