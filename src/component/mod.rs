//! Component builders: the five top-level ISCC identifiers, each a short
//! composition over the kernel pieces in [`crate::text`], [`crate::window`],
//! [`crate::simhash`], [`crate::minhash`], [`crate::chunker`],
//! [`crate::imagehash`], [`crate::merkle`] and [`crate::codec`].

use crate::codec::{self, HEAD_CID_I, HEAD_CID_I_PCF, HEAD_CID_T, HEAD_CID_T_PCF, HEAD_DID, HEAD_IID, HEAD_MID};
use crate::config::{INPUT_TRIM, INPUT_TRIM_EXTRA, WINDOW_SIZE_CID_T, WINDOW_SIZE_MID};
use crate::error::Result;
use crate::imagehash::{self, LumaImage};
use crate::merkle;
use crate::minhash;
use crate::simhash;
use crate::text;
use crate::window;
use crate::xxhash;
use std::io::Read;

fn prepend_and_encode(header: u8, digest: &[u8]) -> Result<String> {
    let mut record = vec![header];
    record.extend_from_slice(digest);
    codec::encode(&record)
}

/// Meta-ID: NFKC-normalize and trim `title`/`extra`, join and normalize,
/// build 4-gram (by default) n-grams, xxhash64 each, fold via simhash.
/// Returns `(code, trimmed_title, trimmed_extra)`.
pub fn meta_id(title: &str, extra: &str) -> Result<(String, String, String)> {
    let title_nfkc: String = unicode_normalization::UnicodeNormalization::nfkc(title).collect();
    let extra_nfkc: String = unicode_normalization::UnicodeNormalization::nfkc(extra).collect();

    let trimmed_title = text::trim(&title_nfkc, INPUT_TRIM);
    let trimmed_extra = text::trim(&extra_nfkc, INPUT_TRIM_EXTRA);

    let concat = format!("{trimmed_title} {trimmed_extra}");
    let concat = concat.trim();

    let normalized = text::normalize_text(concat);
    let chars: Vec<char> = normalized.chars().collect();
    let n_grams = window::sliding_window(&chars, WINDOW_SIZE_MID);

    let digests: Vec<Vec<u8>> = n_grams
        .iter()
        .map(|gram| {
            let s: String = gram.iter().collect();
            xxhash::xxh64_digest(s.as_bytes(), 0).to_vec()
        })
        .collect();

    let simhash_digest = simhash::similarity_hash(&digests);
    let code = prepend_and_encode(HEAD_MID, &simhash_digest)?;

    Ok((code, trimmed_title, trimmed_extra))
}

/// Content-ID-Text: NFKC-normalize, text-normalize, split into words,
/// 5-word (by default) shingles, xxhash32 each, fold via MinHash then
/// simhash.
pub fn content_id_text(text_input: &str, partial: bool) -> Result<String> {
    let nfkc: String = unicode_normalization::UnicodeNormalization::nfkc(text_input).collect();
    let normalized = text::normalize_text(&nfkc);

    let words: Vec<&str> = normalized.split_whitespace().collect();
    let shingles = window::sliding_window(&words, WINDOW_SIZE_CID_T);

    let features: Vec<u32> = shingles
        .iter()
        .map(|shingle| {
            let joined = shingle.join(" ");
            xxhash::xxh32(joined.as_bytes(), 0)
        })
        .collect();

    let digest = minhash::fold(&minhash::minimum_hash(&features));
    let header = if partial { HEAD_CID_T_PCF } else { HEAD_CID_T };
    prepend_and_encode(header, &digest)
}

/// Content-ID-Image: run the DCT perceptual hash pipeline over an
/// already-decoded luminance image.
pub fn content_id_image(img: &LumaImage, partial: bool) -> Result<String> {
    let digest = imagehash::dct_hash(img);
    let header = if partial { HEAD_CID_I_PCF } else { HEAD_CID_I };
    prepend_and_encode(header, &digest)
}

/// Data-ID: stream through the gear chunker, xxhash32 each chunk, fold via
/// MinHash then simhash.
pub fn data_id<R: Read>(stream: R) -> Result<String> {
    let chunks = crate::chunker::data_chunks(stream)?;
    // data_chunks legitimately returns zero chunks for a truly empty byte
    // stream (unlike sliding_window, it has no "whole input as one window"
    // fallback), so minimum_hash still needs a feature to work with here.
    let features: Vec<u32> = if chunks.is_empty() {
        vec![xxhash::xxh32(b"", 0)]
    } else {
        chunks.iter().map(|chunk| xxhash::xxh32(chunk, 0)).collect()
    };

    let digest = minhash::fold(&minhash::minimum_hash(&features));
    prepend_and_encode(HEAD_DID, &digest)
}

/// Instance-ID: the Merkle top hash of the raw byte stream.
pub fn instance_id<R: Read>(stream: R) -> Result<String> {
    let digest = merkle::instance_digest(stream)?;
    prepend_and_encode(HEAD_IID, &digest)
}
