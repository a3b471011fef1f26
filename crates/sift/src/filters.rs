//! Built-in demo filters.
//!
//! A fixed list of named tracking filters used as a manual smoke test for
//! the grammar: each entry pairs a display name with a filter query.

/// A named filter query.
pub struct Filter {
    /// Display name.
    pub name: &'static str,
    /// Filter query source.
    pub query: &'static str,
}

/// The built-in demo filter list.
pub const DEMO_FILTERS: &[Filter] = &[
    Filter {
        name: "The Hills",
        query: "(((#thehills OR thehills) OR ((hills AND the) AND mtv)) OR (@MTV_TheHills OR MTV_TheHills))",
    },
    Filter {
        name: "The Hills Finale",
        query: "(finale AND (((#thehills OR thehills) OR ((hills AND the) AND mtv)) OR (@MTV_TheHills OR MTV_TheHills)))",
    },
    Filter {
        name: "Goodbye Hills",
        query: "(#goodbyehills OR goodbyehills)",
    },
    Filter {
        name: "Lauren Conrad",
        query: "(((#laurenconrad OR laurenconrad) OR @laurenconrad) OR (conrad AND lauren))",
    },
    Filter {
        name: "Heidi Montag",
        query: "(((#heidimontag OR heidimontag) OR @heidimontag) OR (heidi AND montag))",
    },
    Filter {
        name: "Spencer Pratt",
        query: "(((#spencerpratt OR spencerpratt) OR @spencerpratt) OR (pratt AND spencer))",
    },
    Filter {
        name: "Kristin Cavallari",
        query: "((((#kristincavallari OR kristincavallari) OR @kristincav) OR kristincav) OR (cavallari AND kristin))",
    },
    Filter {
        name: "Audrina Patridge",
        query: "((((#audrinapatridge OR audrinapatridge) OR @officialaudrina) OR officialaudrina) OR (audrina AND patridge))",
    },
    Filter {
        name: "Brody Jenner",
        query: "(((#brodyjenner OR brodyjenner) OR @brodyjenner) OR (brody AND jenner))",
    },
    Filter {
        name: "Lo Bosworth",
        query: "(((#lobosworth OR lobosworth) OR @lobosworth) OR (bosworth AND lo))",
    },
    Filter {
        name: "Stephanie Pratt",
        query: "(((#stephaniepratt OR stephaniepratt) OR @stephaniepratt) OR (pratt AND stephanie))",
    },
    Filter {
        name: "Whitney Port",
        query: "(((#whitneyport OR whitneyport) OR (port AND whitney)) OR (@WhitneyEve AND WhitneyEve))",
    },
    Filter {
        name: "Justin Bobby",
        query: "(((#justinbobby OR justinbobby) OR @justinbobby) OR (bobby AND justin))",
    },
    Filter {
        name: "Frankie Delgado",
        query: "(((#frankiedelgado OR frankiedelgado) OR @frankiedelgado) OR (delgado AND frankie))",
    },
    Filter {
        name: "Stacie Hall",
        query: "(((#staciehall OR staciehall) OR @staciehall) OR (hall AND stacie))",
    },
];
