// src/config/consts.rs

// Local store
pub const OPTIONS_FILE: &str = ".store/options.txt";
pub const LOG_FILE: &str = ".store/debug.log";
pub const LOG_PREFIX: &str = "[Caller's Box Configurator]";

// Option keys, as persisted
pub const KEY_ENABLED: &str = "enabled";
pub const KEY_USE_RSR: &str = "useRSR";
pub const KEY_ROLE_TERMS: &str = "roleTerms";

// Option defaults
pub const DEFAULT_ENABLED: bool = true;
pub const DEFAULT_USE_RSR: bool = true;
pub const DEFAULT_ROLE_TERMS: &str = "birds";

// Role-term selectors
pub const ROLES_BIRDS: &str = "birds";
pub const ROLES_LEAD_FOLLOW: &str = "lf";
pub const ROLES_LADIES_GENTS: &str = "lg";
pub const ROLES_MEN_WOMEN: &str = "mw"; // no substitution

// Page structure (Caller's Box dance page)
pub const PHRASES_ID: &str = "phrases";
pub const FORMATION_LABEL: &str = "FormationDetail";
pub const VARIANT_VIDEOS_LABEL: &str = "VariantVideos";
pub const CALLING_NOTES_HEADING: &str = "Calling Notes";
