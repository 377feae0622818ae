// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::{RuleTable, Swap};

const AI_PHRASES: &[&str] = &[
    "In conclusion,",
    "Furthermore,",
    "Moreover,",
    "It is important to note that",
    "As an AI language model,",
    "Certainly,",
    "However,",
    "Additionally,",
    "Consequently,",
    "Nevertheless,",
    "Notwithstanding,",
    "In summary,",
    "To summarize,",
    "It should be noted that",
    "It is worth mentioning that",
    "As previously mentioned,",
    "In light of the above,",
    "It's worth noting that",
    "Delving into",
    "It's important to understand that",
    "This is a testament to",
    "In the realm of",
    "At the end of the day,",
    "When it comes to",
    "In terms of",
    "It goes without saying that",
    "Needless to say,",
    "Without a doubt,",
    "By and large,",
    "For all intents and purposes,",
    "As a matter of fact,",
    "To put it simply,",
    "In essence,",
    "All things considered,",
    "Taking into account",
    "With that being said,",
    "On the other hand,",
    "That said,",
    "Having said that,",
    "Be that as it may,",
];

const WORD_SWAPS: &[(&str, &str)] = &[
    ("utilize", "use"),
    ("implement", "set up"),
    ("facilitate", "help"),
    ("demonstrate", "show"),
    ("subsequently", "then"),
    ("optimum", "best"),
    ("verify", "check"),
    ("ensure", "make sure"),
    ("commence", "start"),
    ("terminate", "end"),
    ("endeavor", "try"),
    ("assist", "help"),
    ("paradigm", "model"),
    ("leverage", "use"),
    ("synergy", "teamwork"),
    ("disseminate", "share"),
    ("methodology", "method"),
    ("functionality", "feature"),
    ("optimization", "improvement"),
    ("parameters", "settings"),
    ("configuration", "setup"),
    ("initialization", "startup"),
    ("comprehensive", "complete"),
    ("predominantly", "mostly"),
    ("approximately", "about"),
    ("significantly", "a lot"),
    ("consequently", "so"),
    ("nevertheless", "still"),
    ("aforementioned", "previous"),
    ("allocate", "set aside"),
    ("ameliorate", "improve"),
    ("ascertain", "find out"),
    ("benchmark", "standard"),
    ("bifurcate", "split"),
    ("cognizant", "aware"),
    ("concatenate", "join"),
    ("constituents", "parts"),
    ("delineate", "outline"),
    ("dichotomy", "split"),
    ("elucidate", "explain"),
    ("enumerate", "list"),
    ("expedite", "speed up"),
    ("extrapolate", "estimate"),
    ("formulate", "create"),
    ("heuristic", "rule of thumb"),
    ("hypothesize", "guess"),
    ("incentivize", "motivate"),
    ("juxtapose", "compare"),
    ("mitigate", "reduce"),
    ("necessitate", "need"),
    ("nomenclature", "naming"),
    ("obfuscate", "confuse"),
    ("perpetuate", "continue"),
    ("predicated", "based"),
    ("proliferate", "spread"),
    ("promulgate", "announce"),
    ("quintessential", "classic"),
    ("ramification", "effect"),
    ("recapitulate", "recap"),
    ("remuneration", "pay"),
    ("scrutinize", "examine"),
    ("stipulate", "require"),
    ("substantiate", "prove"),
    ("superfluous", "extra"),
    ("ubiquitous", "common"),
    ("unilateral", "one-sided"),
    ("viable", "workable"),
    ("aggregate", "total"),
    ("analogous", "similar"),
    ("arbitrary", "random"),
    ("augment", "boost"),
    ("conducive", "helpful"),
    ("contingent", "dependent"),
    ("correlate", "connect"),
    ("detriment", "harm"),
    ("disparate", "different"),
    ("efficacy", "effectiveness"),
    ("empirical", "tested"),
    ("exacerbate", "worsen"),
    ("holistic", "overall"),
    ("inherent", "built-in"),
    ("multifaceted", "complex"),
    ("nuanced", "subtle"),
    ("paramount", "key"),
    ("pertinent", "relevant"),
    ("propagate", "spread"),
    ("resilient", "tough"),
    ("salient", "important"),
    ("tangible", "real"),
    ("transparent", "clear"),
    ("warranted", "justified"),
];

const CONTRACTIONS: &[(&str, &str)] = &[
    ("cannot", "can't"),
    ("do not", "don't"),
    ("will not", "won't"),
    ("is not", "isn't"),
    ("are not", "aren't"),
    ("would not", "wouldn't"),
    ("should not", "shouldn't"),
    ("could not", "couldn't"),
    ("has not", "hasn't"),
    ("have not", "haven't"),
    ("did not", "didn't"),
];

const CASUAL_STARTERS: &[&str] = &[
    "Basically, ",
    "So, ",
    "Honestly, ",
    "Look, ",
    "Here's the deal: ",
    "Real talk, ",
    "Okay so, ",
    "Alright, ",
    "Thing is, ",
    "Not gonna lie, ",
];

const CASUAL_CONNECTORS: &[&str] = &["And", "Plus", "Also"];

const CASUAL_FILLERS: &[&str] = &[" honestly", "  — you know?", " tbh", " basically", " right?"];

const PROFESSIONAL_SWAPS: &[(&str, &str)] = &[
    ("very", "quite"),
    ("big", "substantial"),
    ("small", "modest"),
    ("good", "strong"),
    ("bad", "suboptimal"),
    ("thing", "element"),
    ("stuff", "material"),
    ("got", "obtained"),
    ("a lot of", "considerable"),
];

const STORY_OPENERS: &[&str] = &[
    "Picture this — ",
    "Imagine this: ",
    "So here's what happened — ",
    "Let me set the scene — ",
    "Here's the thing — ",
];

const STORY_TRANSITIONS: &[&str] = &["Then", "After that,", "Next thing you know,", "And — get this —"];

const ACADEMIC_SWAPS: &[(&str, &str)] = &[
    ("show", "illustrate"),
    ("think", "posit"),
    ("use", "employ"),
    ("help", "facilitate"),
    ("start", "initiate"),
    ("part", "component"),
    ("check", "evaluate"),
];

const DEBUG_STATEMENTS: &[&str] = &[
    "console.log(\"DEBUG:\",{data})",
    "console.trace(\"stack\")",
    "console.time(\"perf\")",
    "debugger",
    "console.warn(\"check this\")",
    "console.log(\">>> here <<<\")",
    "console.table({data})",
];

const REVIEW_COMMENTS: &[&str] = &[
    "// TODO: needs review",
    "// FIXME: edge case",
    "// NOTE: temp solution",
    "// HACK: works for now",
    "// OPTIMIZE: refactor later",
    "// XXX: revisit this",
    "// ?: why does this work",
    "// CHANGED: was different before",
];

const IDENTIFIER_RENAMES: &[(&str, &str)] = &[
    ("result", "res"),
    ("index", "idx"),
    ("element", "el"),
    ("value", "val"),
    ("temporary", "tmp"),
    ("error", "err"),
    ("response", "resp"),
    ("callback", "cb"),
    ("function", "fn"),
    ("parameter", "param"),
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn swaps(items: &[(&str, &str)]) -> Vec<Swap> {
    items.iter().map(|(from, to)| Swap::new(*from, *to)).collect()
}

pub(super) fn builtin() -> RuleTable {
    RuleTable {
        ai_phrases: strings(AI_PHRASES),
        word_swaps: swaps(WORD_SWAPS),
        contractions: swaps(CONTRACTIONS),
        casual_starters: strings(CASUAL_STARTERS),
        casual_connectors: strings(CASUAL_CONNECTORS),
        casual_fillers: strings(CASUAL_FILLERS),
        professional_swaps: swaps(PROFESSIONAL_SWAPS),
        story_openers: strings(STORY_OPENERS),
        story_transitions: strings(STORY_TRANSITIONS),
        academic_swaps: swaps(ACADEMIC_SWAPS),
        academic_connector: "As such,".to_string(),
        debug_statements: strings(DEBUG_STATEMENTS),
        review_comments: strings(REVIEW_COMMENTS),
        declaration_swap: Swap::new("const ", "let "),
        identifier_renames: swaps(IDENTIFIER_RENAMES),
        todo_comment: "// TODO: clean this up".to_string(),
    }
}
