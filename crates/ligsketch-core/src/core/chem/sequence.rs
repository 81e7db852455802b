use phf::{Map, phf_map};

static THREE_LETTER_CODES: Map<char, &'static str> = phf_map! {
    'A' => "ALA", 'R' => "ARG", 'N' => "ASN", 'D' => "ASP", 'C' => "CYS",
    'Q' => "GLN", 'E' => "GLU", 'G' => "GLY", 'H' => "HIS", 'I' => "ILE",
    'L' => "LEU", 'K' => "LYS", 'M' => "MET", 'F' => "PHE", 'P' => "PRO",
    'S' => "SER", 'T' => "THR", 'W' => "TRP", 'Y' => "TYR", 'V' => "VAL",
};

pub const UNKNOWN_RESIDUE: &str = "UNK";

/// Normalizes a raw protein sequence.
///
/// A single leading header line (starting with `>`) is dropped, all whitespace is removed,
/// and the remainder is uppercased.
pub fn clean_sequence(raw: &str) -> String {
    let trimmed = raw.trim_start();
    let body = if trimmed.starts_with('>') {
        trimmed.split_once('\n').map_or("", |(_, rest)| rest)
    } else {
        trimmed
    };
    body.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Three-letter residue code for a one-letter amino-acid code.
pub fn residue_code(one_letter: char) -> &'static str {
    THREE_LETTER_CODES
        .get(&one_letter.to_ascii_uppercase())
        .copied()
        .unwrap_or(UNKNOWN_RESIDUE)
}
