//! Switches every script carries regardless of its declarations.

/// Row of the help table: switch summary and help lines.
pub(crate) struct BuiltinSwitch {
    pub short: char,
    pub long: &'static str,
    pub summary: &'static str,
    pub help: &'static [&'static str],
}

pub(crate) const DRY_RUN: BuiltinSwitch = BuiltinSwitch {
    short: 'd',
    long: "dry-run",
    summary: "-d, --dry-run",
    help: &[
        "Run script without any real changes.",
        "\tSets --verbose by default.",
    ],
};

pub(crate) const VERBOSE: BuiltinSwitch = BuiltinSwitch {
    short: 'v',
    long: "verbose",
    summary: "-v, --[no-]verbose",
    help: &["Run verbosely"],
};

pub(crate) const HELP: BuiltinSwitch = BuiltinSwitch {
    short: 'h',
    long: "help",
    summary: "-h, --help",
    help: &["Show this message"],
};

/// Built-in switches checked for collisions with user declarations.
pub(crate) const ALL: [&BuiltinSwitch; 3] = [&DRY_RUN, &VERBOSE, &HELP];
