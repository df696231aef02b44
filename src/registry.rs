//! Name -> demo lookup for the `catalog` binary.

use crate::demo::{Category, Demo, DemoContext};
use crate::error::{CatalogError, Result};
use crate::{behavioral, creational, solid, structural};

/// Suggestions further away than this are not offered.
const MAX_SUGGESTION_DISTANCE: usize = 2;

const fn demo(
    name: &'static str,
    category: Category,
    summary: &'static str,
    run: crate::demo::RunFn,
) -> Demo {
    Demo {
        name,
        category,
        summary,
        run,
    }
}

static DEMOS: &[Demo] = &[
    // Creational
    demo("builder", Category::Creational, "House builder with validated room count", creational::builder::run),
    demo("factory", Category::Creational, "Animal factory returning trait objects", creational::factory::run),
    demo("factory-vehicle", Category::Creational, "Vehicle factory with case-insensitive kinds", creational::factory::run_vehicles),
    demo("singleton", Category::Creational, "Process-wide app config", creational::singleton::run),
    demo("singleton-database", Category::Creational, "Lazily connected database handle", creational::singleton::run_database),
    // Structural
    demo("adapter", Category::Structural, "Legacy file logger behind a new interface", structural::adapter::run),
    demo("bridge", Category::Structural, "Remotes decoupled from the devices they drive", structural::bridge::run),
    demo("composite", Category::Structural, "Files and folders as one tree", structural::composite::run),
    demo("decorator", Category::Structural, "Coffee add-ons stacked at runtime", structural::decorator::run),
    demo("facade", Category::Structural, "One call hides a video conversion pipeline", structural::facade::run),
    demo("flyweight", Category::Structural, "Trees sharing cached type data", structural::flyweight::run),
    demo("proxy", Category::Structural, "Image loaded on first display", structural::proxy::run),
    // Behavioral
    demo("chain", Category::Behavioral, "Request handlers: auth, validation, rate limit", behavioral::chain::run),
    demo("command", Category::Behavioral, "Remote control with undo", behavioral::command::run),
    demo("iterator", Category::Behavioral, "Walking a name collection", behavioral::iterator::run),
    demo("mediator", Category::Behavioral, "Chat room routing messages between users", behavioral::mediator::run),
    demo("memento", Category::Behavioral, "Editor snapshots and undo", behavioral::memento::run),
    demo("observer", Category::Behavioral, "Channel notifying subscribers", behavioral::observer::run),
    demo("state", Category::Behavioral, "Order lifecycle: new, paid, shipped", behavioral::state::run),
    demo("strategy", Category::Behavioral, "Swappable payment methods", behavioral::strategy::run),
    demo("template", Category::Behavioral, "Fixed read, process, save skeleton", behavioral::template::run),
    // SOLID
    demo("srp-user-printer", Category::Solid, "User data vs. printing", solid::srp::user_printer::run),
    demo("srp-report", Category::Solid, "Report validation, file output, email", solid::srp::report::run),
    demo("srp-order", Category::Solid, "Order validation, storage, confirmation", solid::srp::order::run),
    demo("srp-article", Category::Solid, "Article publishing pipeline", solid::srp::article::run),
    demo("srp-invoice", Category::Solid, "Invoice calculation, persistence, email", solid::srp::invoice::run),
    demo("srp-todo", Category::Solid, "Todo list store and file storage", solid::srp::todo::run),
    demo("srp-registration", Category::Solid, "User registration split into services", solid::srp::registration::run),
    demo("dip-greeter", Category::Solid, "Greeter with an injected printer", solid::dip::run_greeter),
    demo("dip-lamp", Category::Solid, "Lamp with an injected switch", solid::dip::run_lamp),
    demo("dip-user-service", Category::Solid, "User service over swappable repositories", solid::dip::run_user_service),
    demo("dip-alert", Category::Solid, "Alerts over email or SMS", solid::dip::run_alert),
];

/// Every demo, grouped by category in catalog order.
pub fn all() -> &'static [Demo] {
    DEMOS
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static Demo> {
    DEMOS.iter().filter(move |d| d.category == category)
}

/// Case-insensitive lookup. Unknown names come back with the closest
/// known name, if one is close enough.
pub fn find(name: &str) -> Result<&'static Demo> {
    let wanted = name.trim().to_lowercase();
    if let Some(demo) = DEMOS.iter().find(|d| d.name == wanted) {
        return Ok(demo);
    }

    let suggestion = suggest(&wanted);
    tracing::debug!(name, ?suggestion, "demo not found");
    Err(CatalogError::unknown_demo(name, suggestion))
}

fn suggest(name: &str) -> Option<String> {
    DEMOS
        .iter()
        .map(|d| (levenshtein_distance(name, d.name), d.name))
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name.to_string())
}

pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut matrix = vec![vec![0; b.len() + 1]; a.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a.len()][b.len()]
}

/// Runs each demo under a `==== name ====` banner, blank line between.
pub fn run_sequence(demos: &[&Demo], ctx: &mut DemoContext<'_>) -> Result<()> {
    for (index, demo) in demos.iter().enumerate() {
        if index > 0 {
            writeln!(ctx.out)?;
        }
        writeln!(ctx.out, "==== {} ====", demo.name)?;
        demo.execute(ctx)?;
    }
    Ok(())
}

pub fn run_all(ctx: &mut DemoContext<'_>) -> Result<()> {
    let demos: Vec<&Demo> = DEMOS.iter().collect();
    run_sequence(&demos, ctx)
}
