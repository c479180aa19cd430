//! Voice catalog
//!
//! Static set of voice identifiers accepted by the synthesis backends.
//! The catalog is fixed data; membership checks and the random pick are the
//! only operations. Random selection takes the RNG as an argument so callers
//! (and tests) control the randomness source.

use rand::Rng;

/// Available voices for text-to-speech conversion
pub const VOICES: &[&str] = &[
    // DISNEY VOICES
    "en_us_ghostface",    // Ghost Face
    "en_us_chewbacca",    // Chewbacca
    "en_us_c3po",         // C3PO
    "en_us_stitch",       // Stitch
    "en_us_stormtrooper", // Stormtrooper
    "en_us_rocket",       // Rocket
    // ENGLISH VOICES
    "en_au_001", // English AU - Female
    "en_au_002", // English AU - Male
    "en_uk_001", // English UK - Male 1
    "en_uk_003", // English UK - Male 2
    "en_us_001", // English US - Female (Int. 1)
    "en_us_002", // English US - Female (Int. 2)
    "en_us_006", // English US - Male 1
    "en_us_007", // English US - Male 2
    "en_us_009", // English US - Male 3
    "en_us_010", // English US - Male 4
    // EUROPE VOICES
    "fr_001", // French - Male 1
    "fr_002", // French - Male 2
    "de_001", // German - Female
    "de_002", // German - Male
    "es_002", // Spanish - Male
    // AMERICA VOICES
    "es_mx_002", // Spanish MX - Male
    "br_001",    // Portuguese BR - Female 1
    "br_003",    // Portuguese BR - Female 2
    "br_004",    // Portuguese BR - Female 3
    "br_005",    // Portuguese BR - Male
    // ASIA VOICES
    "id_001", // Indonesian - Female
    "jp_001", // Japanese - Female 1
    "jp_003", // Japanese - Female 2
    "jp_005", // Japanese - Female 3
    "jp_006", // Japanese - Male
    "kr_002", // Korean - Male 1
    "kr_003", // Korean - Female
    "kr_004", // Korean - Male 2
    // SINGING VOICES
    "en_female_f08_salut_damour", // Alto
    "en_male_m03_lobby",          // Tenor
    "en_female_f08_warmy_breeze", // Warmy Breeze
    "en_male_m03_sunshine_soon",  // Sunshine Soon
    // OTHER
    "en_male_narration",   // narrator
    "en_male_funny",       // wacky
    "en_female_emotional", // peaceful
    // More Singing
    "en_male_sing_deep_jingle",
    "en_male_sing_funny_it_goes_up",
    "en_male_m2_xhxs_m03_silly",
    "en_male_sing_funny_thanksgiving",
    "en_female_ht_f08_glorious",
    "en_female_ht_f08_wonderful_world",
    "en_female_ht_f08_halloween",
    "en_female_ht_f08_newyear",
    "en_female_f08_twinkle",
    // More others unsorted
    "en_male_jomboy",
    "en_female_samc",
    "en_female_makeup",
    "en_male_cody",
    "en_male_grinch",
    "en_female_richgirl",
    "en_male_ashmagic",
    "en_male_jarvis",
    "en_male_ukneighbor",
    "en_male_olantekkers",
    "en_female_shenna",
    "en_male_ukbutler",
    "en_male_trevor",
    "en_female_pansino",
    "en_male_m03_classical",
    "en_male_cupid",
    "en_female_betty",
    "en_male_m2_xhxs_m03_christmas",
    "en_female_grandma",
    "en_male_santa_narration",
    "en_male_santa_effect",
    "en_male_wizard",
    "en_male_ghosthost",
    "en_female_madam_leota",
    "bp_female_ivete",
    "bp_female_ludmilla",
    "pt_female_lhays",
    "pt_female_laizza",
    "pt_male_bueno",
    "jp_female_fujicochan",
    "jp_female_hasegawariona",
    "jp_male_keiichinakano",
    "jp_female_oomaeaika",
    "jp_male_yujinchigusa",
    "jp_female_shirou",
    "jp_male_tamawakazuki",
    "jp_female_kaorishoji",
    "jp_female_yagishaki",
    "jp_male_hikakin",
    "jp_female_rei",
    "jp_male_shuichiro",
    "jp_male_matsudake",
    "jp_female_machikoriiita",
    "jp_male_matsuo",
    "jp_male_osada",
    "BV074_streaming",
    "BV075_streaming",
];

/// Check whether `voice` is a known voice identifier.
pub fn is_valid(voice: &str) -> bool {
    VOICES.contains(&voice)
}

/// Pick a voice uniformly at random from the catalog.
pub fn random_voice<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    VOICES[rng.gen_range(0..VOICES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_known_voice_is_valid() {
        assert!(is_valid("en_us_001"));
        assert!(is_valid("en_us_ghostface"));
        assert!(is_valid("jp_male_osada"));
    }

    #[test]
    fn test_unknown_voice_is_invalid() {
        assert!(!is_valid("not_a_voice"));
        assert!(!is_valid(""));
        assert!(!is_valid("EN_US_001"));
    }

    #[test]
    fn test_random_voice_is_from_catalog() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert!(is_valid(random_voice(&mut rng)));
        }
    }

    #[test]
    fn test_random_voice_is_deterministic_for_seeded_rng() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(random_voice(&mut a), random_voice(&mut b));
        }
    }
}
