//! Lexical index: surface form → lemma handles.
//!
//! Keys are folded surface forms (NFC, trimmed, lowercased) stored in an
//! `fst::Map` whose values are ordinals into a bucket vector. Because the
//! ordinals are assigned in key order, ordinal `i` is also the rank of the key,
//! which is what nearest-neighbour lookup needs.
//!
//! Public API:
//! - `LexicalIndex::build` - build from `(form, handle)` pairs in one pass
//! - `LexicalIndex::find` - case-insensitive exact lookup
//! - `LexicalIndex::closest` - lower-bound neighbourhood lookup

use crate::error::CoreError;
use crate::lemma::LemmaRef;
use crate::utils::{fold_key, normalize};
use ahash::AHashMap;
use fst::{IntoStreamer, Map, MapBuilder, Streamer};

pub struct LexicalIndex {
    map: Map<Vec<u8>>,
    buckets: Vec<Vec<LemmaRef>>,
}

impl LexicalIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            map: MapBuilder::memory().into_map(),
            buckets: Vec::new(),
        }
    }

    /// Build an index from `(surface form, handle)` pairs.
    ///
    /// Handles are kept per key in the order they arrive. Forms are trimmed
    /// before folding; empty forms are skipped.
    pub fn build<'a, I>(entries: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (&'a str, LemmaRef)>,
    {
        let mut grouped: AHashMap<String, Vec<LemmaRef>> = AHashMap::new();
        let mut postings = 0usize;
        for (form, handle) in entries {
            let key = fold_key(&normalize(form));
            if key.is_empty() {
                continue;
            }
            grouped.entry(key).or_default().push(handle);
            postings += 1;
        }

        let mut keys: Vec<(String, Vec<LemmaRef>)> = grouped.into_iter().collect();
        keys.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

        let mut builder = MapBuilder::memory();
        let mut buckets = Vec::with_capacity(keys.len());
        for (ordinal, (key, bucket)) in keys.into_iter().enumerate() {
            builder.insert(key.as_bytes(), ordinal as u64)?;
            buckets.push(bucket);
        }
        let bytes = builder.into_inner()?;
        let map = Map::new(bytes)?;

        tracing::debug!(keys = buckets.len(), postings, "built lexical index");
        Ok(Self { map, buckets })
    }

    /// Handles for `word`, matched case-insensitively. The query is not
    /// trimmed. Empty when absent.
    pub fn find(&self, word: &str) -> &[LemmaRef] {
        let key = fold_key(word);
        self.map
            .get(key.as_bytes())
            .and_then(|ordinal| self.buckets.get(ordinal as usize))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Handles near `word` in key order.
    ///
    /// Takes the first key not less than the folded word. When that is the
    /// smallest key only its bucket is returned. A word at or after the
    /// largest key yields the last bucket only. Otherwise the preceding
    /// bucket comes first, followed by the lower-bound bucket.
    pub fn closest(&self, word: &str) -> Vec<LemmaRef> {
        let Some(last) = self.buckets.last() else {
            return Vec::new();
        };
        let key = fold_key(word);
        let mut stream = self.map.range().ge(key.as_bytes()).into_stream();
        let lower_bound = stream.next().map(|(_, ordinal)| ordinal as usize);

        match lower_bound {
            Some(0) => self.buckets[0].clone(),
            Some(i) if i + 1 == self.buckets.len() => last.clone(),
            Some(i) => {
                let mut out = self.buckets[i - 1].clone();
                out.extend_from_slice(&self.buckets[i]);
                out
            }
            None => last.clone(),
        }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// All keys in byte-lexicographic order.
    pub fn keys(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.buckets.len());
        let mut stream = self.map.stream();
        while let Some((key, _)) = stream.next() {
            out.push(String::from_utf8_lossy(key).into_owned());
        }
        out
    }
}

impl Default for LexicalIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LexicalIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexicalIndex")
            .field("keys", &self.buckets.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lemma::WordKind;

    fn noun(i: usize) -> LemmaRef {
        LemmaRef::new(WordKind::Noun, i)
    }

    fn sample() -> LexicalIndex {
        LexicalIndex::build(vec![
            ("Haus", noun(0)),
            ("Häuser", noun(0)),
            ("Hund", noun(1)),
            ("Baum", noun(2)),
            ("Bäume", noun(2)),
            ("hund", LemmaRef::new(WordKind::Verb, 0)),
        ])
        .unwrap()
    }

    #[test]
    fn find_is_case_insensitive() {
        let idx = sample();
        assert_eq!(idx.find("HAUS"), &[noun(0)]);
        assert_eq!(idx.find("häuser"), &[noun(0)]);
        assert!(idx.find("Katze").is_empty());
    }

    #[test]
    fn find_keeps_insertion_order_per_key() {
        let idx = sample();
        assert_eq!(
            idx.find("Hund"),
            &[noun(1), LemmaRef::new(WordKind::Verb, 0)]
        );
    }

    #[test]
    fn closest_boundaries() {
        let idx = sample();
        // keys: baum, bäume, haus, hund, häuser
        assert_eq!(idx.keys(), vec!["baum", "bäume", "haus", "hund", "häuser"]);
        assert_eq!(idx.closest("aal"), vec![noun(2)]);
        assert_eq!(idx.closest("baum"), vec![noun(2)]);
        assert_eq!(idx.closest("hat"), vec![noun(2), noun(0)]);
        assert_eq!(idx.closest("zzz"), vec![noun(0)]);
    }

    #[test]
    fn closest_at_largest_key_is_last_bucket_only() {
        let idx = sample();
        assert_eq!(idx.closest("häuser"), vec![noun(0)]);
        assert_eq!(idx.closest("HÄUSER"), vec![noun(0)]);
        // "hz" sorts between "hund" and "häuser", so its lower bound is the
        // largest key
        assert_eq!(idx.closest("hz"), vec![noun(0)]);
        assert_eq!(
            idx.closest("hu"),
            vec![noun(0), noun(1), LemmaRef::new(WordKind::Verb, 0)]
        );
    }

    #[test]
    fn padded_queries_do_not_match() {
        let idx = LexicalIndex::build(vec![(" Haus ", noun(0))]).unwrap();
        assert_eq!(idx.keys(), vec!["haus"]);
        assert_eq!(idx.find("Haus"), &[noun(0)]);
        assert!(idx.find(" haus ").is_empty());
    }

    #[test]
    fn empty_index() {
        let idx = LexicalIndex::new();
        assert!(idx.is_empty());
        assert!(idx.find("x").is_empty());
        assert!(idx.closest("x").is_empty());
    }

    #[test]
    fn empty_forms_are_skipped() {
        let idx = LexicalIndex::build(vec![("", noun(0)), ("  ", noun(1))]).unwrap();
        assert!(idx.is_empty());
    }
}
