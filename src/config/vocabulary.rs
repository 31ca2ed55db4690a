//! Keyword vocabularies.
//!
//! Data tables only. The keyword extractor and the non-map check read these
//! through `parse::Vocabulary`, which can also be loaded from a file.

/// Map-genre terms recognised in free-text queries, in output order.
pub const DEFAULT_MAP_TYPES: &[&str] = &[
    "adventure",
    "survival",
    "puzzle",
    "parkour",
    "horror",
    "pvp",
    "minigame",
    "creation",
    "modded",
    "skyblock",
    "castle",
    "dungeon",
    "city",
    "house",
    "mansion",
    "redstone",
    "farm",
    "automatic",
    "modern",
    "medieval",
];

/// Terms that suggest the user is looking for something other than a map.
pub const NON_MAP_TERMS: &[&str] = &[
    "texture pack",
    "resource pack",
    "mod",
    "modpack",
    "shader",
    "optifine",
    "forge",
    "fabric",
    "plugin",
    "datapack",
    "data pack",
];

/// Number of raw query tokens used when no vocabulary term matches.
pub const FALLBACK_KEYWORD_COUNT: usize = 3;
