//! Fixed transliterated note-name tables for the four-octave pitch space.
//!
//! Five tables exist because degree indices can wrap one octave upward: a
//! degree addressed past the end of its own table resolves against the next
//! table up, so octave 3 needs octave 4's names available.

use once_cell::sync::Lazy;

pub const OCTAVE_ZERO_NOTE_NAMES: &[&str] = &[
    "qarār yegāh",
    "qarār qarār nīm ḥiṣār",
    "qarār shūrī",
    "qarār qarār ḥiṣār",
    "qarār qarār tīk ḥiṣār/shūrī",
    "qarār nīm ʿushayrān",
    "qarār ʿushayrān",
    "qarār nīm ʿajam ʿushayrān",
    "qarār ʿajam ʿushayrān",
    "qarār nairūz",
    "qarār tīk ʿajam ʿushayrān",
    "qarār ʿirāq",
    "qarār rahāwī",
    "qarār nīm kawasht/rahāwī",
    "qarār kawasht",
    "qarār tīk kawasht",
    "qarār rāst",
    "qarār tīk rāst",
    "qarār nīm zirguleh",
    "qarār zirguleh",
    "qarār tīk zirguleh",
    "qarār dūgāh",
    "qarār nīm kurdī/nahāwand",
    "qarār nahāwand",
    "qarār kurdī",
    "qarār tīk kūrdī",
    "qarār segāh",
    "qarār nīm buselīk",
    "qarār buselīk/ʿushshāq",
    "qarār tīk buselīk",
    "qarār chahargāh",
    "qarār tīk chahargāh",
    "qarār nīm ḥijāz",
    "qarār ṣabā",
    "qarār ḥijāz",
    "qarār tīk ḥijāz/ṣabā",
    "nīm yegāh",
];

pub const OCTAVE_ONE_NOTE_NAMES: &[&str] = &[
    "yegāh",
    "qarār nīm ḥiṣār",
    "shūrī",
    "qarār ḥiṣār",
    "qarār tīk ḥiṣār/shūrī",
    "nīm ʿushayrān",
    "ʿushayrān",
    "nīm ʿajam ʿushayrān",
    "ʿajam ʿushayrān",
    "nairūz",
    "tīk ʿajam ʿushayrān",
    "ʿirāq",
    "rahāwī",
    "nīm kawasht",
    "kawasht",
    "tīk kawasht",
    "rāst",
    "tīk rāst",
    "nīm zirguleh",
    "zirguleh",
    "tīk zirguleh",
    "dūgāh",
    "nīm kurdī/nahāwand",
    "nahāwand",
    "kurdī",
    "tīk kūrdī",
    "segāh",
    "nīm buselīk",
    "buselīk/ʿushshāq",
    "tīk buselīk",
    "chahargāh",
    "tīk chahargāh",
    "nīm ḥijāz",
    "ṣabā",
    "ḥijāz",
    "tīk ḥijāz/ṣabā",
    "nīm nawā",
];

pub const OCTAVE_TWO_NOTE_NAMES: &[&str] = &[
    "nawā",
    "nīm ḥiṣār",
    "jawāb shūrī",
    "ḥiṣār",
    "tīk ḥiṣār",
    "nīm ḥusaynī",
    "ḥusaynī",
    "nīm ʿajam",
    "ʿajam",
    "jawāb nairūz",
    "tīk ʿajam",
    "awj",
    "jawāb rahāwī",
    "nīm māhūr",
    "māhūr",
    "tīk māhūr",
    "kurdān",
    "tīk kurdān",
    "nīm shahnāz",
    "shahnāz",
    "jawāb tīk zirguleh",
    "muḥayyar",
    "nīm sunbuleh",
    "jawāb nahāwand",
    "sunbuleh/zawāl",
    "jawāb tīk kūrdī",
    "buzurk",
    "jawāb nīm buselīk",
    "jawāb buselīk",
    "jawāb tīk buselīk",
    "mahurān",
    "tīk mahurān",
    "jawāb nīm ḥijāz",
    "jawāb ṣabā",
    "jawāb ḥijāz",
    "jawāb tīk ḥijāz",
    "nīm saham/ramal tūtī",
];

pub const OCTAVE_THREE_NOTE_NAMES: &[&str] = &[
    "saham/ramal tūtī",
    "jawāb nīm ḥiṣār",
    "jawāb jawāb shūrī",
    "jawāb ḥiṣār",
    "jawāb tīk ḥiṣār",
    "jawāb nīm ḥusaynī",
    "jawāb ḥusaynī",
    "jawāb nīm ʿajam",
    "jawāb ʿajam",
    "jawāb jawāb nairūz",
    "jawāb tīk ʿajam",
    "jawāb awj",
    "jawāb jawāb rahāwī",
    "jawāb nīm māhūr",
    "jawāb māhūr",
    "jawāb tīk māhūr",
    "jawāb kurdān",
    "jawāb tīk kurdān",
    "jawāb nīm shahnāz",
    "jawāb shahnāz",
    "jawāb jawāb tīk zirguleh",
    "jawāb muḥayyar",
    "jawāb nīm sunbuleh",
    "jawāb jawāb nahāwand",
    "jawāb sunbuleh/zawāl",
    "jawāb jawāb tīk kūrdī",
    "jawāb buzurk",
    "jawāb jawāb nīm buselīk",
    "jawāb jawāb buselīk",
    "jawāb jawāb tīk buselīk",
    "jawāb mahurān",
    "jawāb tīk mahurān",
    "jawāb jawāb nīm ḥijāz",
    "jawāb jawāb ṣabā",
    "jawāb jawāb ḥijāz",
    "jawāb jawāb tīk ḥijāz",
    "jawāb saham/ramal tūtī",
];

pub const OCTAVE_FOUR_NOTE_NAMES: &[&str] = &[
    "jawāb saham/ramal tūtī",
    "jawāb jawāb nīm ḥiṣār",
    "jawāb jawāb jawāb shūrī",
    "jawāb jawāb ḥiṣār",
    "jawāb jawāb tīk ḥiṣār",
    "jawāb jawāb nīm ḥusaynī",
    "jawāb jawāb ḥusaynī",
    "jawāb jawāb nīm ʿajam",
    "jawāb jawāb ʿajam",
    "jawāb jawāb jawāb nairūz",
    "jawāb jawāb tīk ʿajam",
    "jawāb jawāb awj",
    "jawāb jawāb jawāb rahāwī",
    "jawāb jawāb nīm māhūr",
    "jawāb jawāb māhūr",
    "jawāb jawāb tīk māhūr",
    "jawāb jawāb kurdān",
    "jawāb jawāb nīm shahnāz",
    "jawāb jawāb shahnāz",
    "jawāb jawāb jawāb tīk zirguleh",
    "jawāb jawāb muḥayyar",
    "jawāb jawāb nīm sunbuleh",
    "jawāb jawāb jawāb nahāwand",
    "jawāb jawāb sunbuleh/zawāl",
    "jawāb jawāb jawāb tīk kūrdī",
    "jawāb jawāb buzurk",
    "jawāb jawāb jawāb nīm buselīk",
    "jawāb jawāb jawāb buselīk",
    "jawāb jawāb jawāb tīk buselīk",
    "jawāb jawāb mahurān",
    "jawāb jawāb tīk mahurān",
    "jawāb jawāb jawāb nīm ḥijāz",
    "jawāb jawāb jawāb ṣabā",
    "jawāb jawāb jawāb ḥijāz",
    "jawāb jawāb jawāb tīk ḥijāz",
    "jawāb jawāb saham/ramal tūtī",
];

/// Octave tables in ascending octave order.
pub const OCTAVE_TABLES: [&[&str]; 5] = [
    OCTAVE_ZERO_NOTE_NAMES,
    OCTAVE_ONE_NOTE_NAMES,
    OCTAVE_TWO_NOTE_NAMES,
    OCTAVE_THREE_NOTE_NAMES,
    OCTAVE_FOUR_NOTE_NAMES,
];

/// Every distinct note name across the five octave tables, in first-seen
/// order.
pub static ALL_NOTE_NAMES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut seen = Vec::new();
    for table in OCTAVE_TABLES {
        for &name in table {
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
    }
    seen
});

/// Looks up a note name by octave table (0..=4) and degree index.
pub fn note_name_at(octave: usize, index: usize) -> Option<&'static str> {
    OCTAVE_TABLES.get(octave)?.get(index).copied()
}

/// Degree index of `name` within whichever octave table contains it first.
pub fn note_name_index_per_octave(name: &str) -> Option<usize> {
    OCTAVE_TABLES
        .iter()
        .find_map(|table| table.iter().position(|&n| n == name))
}
