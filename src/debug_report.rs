use instant_answers::engine::CacheStatus;
use instant_answers::{AnswerRun, Registry, Solution};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(query: &str, run: &AnswerRun, registry: &Registry, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("?  Query: \"{query}\""), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Match ━━━", ansi::GRAY));
    print_match(run, registry, &palette);

    println!("\n{}", palette.paint("━━━ Answer ━━━", ansi::GRAY));
    print_answer(run, &palette);

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Matching: {}  │  Solve: {}  │  Cache: {}",
        palette.paint(format!("{:?}", run.metrics.total), ansi::GREEN),
        palette.paint(format!("{:?}", run.metrics.matching), ansi::CYAN),
        palette.dim(format!("{:?}", run.metrics.solve)),
        cache_label(run.metrics.cache, &palette),
    );
    println!();
}

fn print_match(run: &AnswerRun, registry: &Registry, palette: &ansi::Palette) {
    let (Some(module), Some(matched)) = (run.module, &run.matched) else {
        println!("{}", palette.dim(format!("  No module matched ({} tried)", run.metrics.modules_tried)));
        println!("\n{}", palette.paint("Registered modules:", ansi::YELLOW));
        for descriptor in registry.descriptors() {
            println!("  • {}", descriptor.name());
        }
        println!("\n{}", palette.dim("  Tip: run with -vv to log every rule that was tried"));
        return;
    };

    println!(
        "  {} {}  {} {}",
        palette.paint("module:", ansi::BLUE),
        palette.bold(module.as_str()),
        palette.dim("│ rule:"),
        palette.paint(format!("#{}", matched.rule), ansi::YELLOW),
    );
    if !matched.trigger.is_empty() {
        println!("  {} {}", palette.paint("trigger:", ansi::BLUE), matched.trigger);
    }
    if !matched.remainder.is_empty() {
        println!("  {} {}", palette.paint("remainder:", ansi::BLUE), matched.remainder);
    }

    let mut slots: Vec<_> =
        matched.captures.iter().filter(|(k, _)| !matches!(k.as_str(), "trigger" | "remainder")).collect();
    slots.sort();
    for (name, value) in slots {
        println!("  {} {}", palette.paint(format!("{name}:"), ansi::BLUE), value);
    }
}

fn print_answer(run: &AnswerRun, palette: &ansi::Palette) {
    let envelope = &run.envelope;
    if !envelope.triggered {
        println!("{}", palette.dim("  (not triggered)"));
        return;
    }

    if let Some(answer_type) = envelope.answer_type {
        println!("  {} {}", palette.paint("type:", ansi::BLUE), answer_type);
    }
    match &envelope.solution {
        Some(Solution::Text(text)) => println!("  {}", palette.bold(palette.paint(text, ansi::GREEN))),
        Some(other) => match serde_json::to_string_pretty(other) {
            Ok(json) => {
                for line in json.lines() {
                    println!("  {}", palette.paint(line, ansi::GREEN));
                }
            }
            Err(err) => println!("  {}", palette.paint(format!("<unprintable solution: {err}>"), ansi::RED)),
        },
        None => {}
    }
    if let Some(err) = &envelope.err {
        println!("  {} {}", palette.paint("error:", ansi::RED), err);
    }
    println!("  {} {}", palette.dim("cacheable:"), envelope.cache);
}

fn cache_label(status: CacheStatus, palette: &ansi::Palette) -> String {
    match status {
        CacheStatus::Bypassed => palette.dim("bypassed"),
        CacheStatus::Hit => palette.paint("hit", ansi::GREEN),
        CacheStatus::Miss => palette.paint("miss", ansi::YELLOW),
        CacheStatus::Stored => palette.paint("stored", ansi::CYAN),
        CacheStatus::Failed => palette.paint("failed", ansi::RED),
    }
}
