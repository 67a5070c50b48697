use showcase_core::sim::SimHost;
use showcase_core::PhaseKind;

const VIEWPORT_WIDTH: f64 = 1000.0;
const SETTLE_BUDGET_MS: f64 = 10_000.0;

type Scenario = fn(&mut SimHost);

const SCENARIOS: &[(&str, Scenario)] = &[
    ("tap", tap),
    ("slow-drag", slow_drag),
    ("fling", fling),
    ("long-fling", long_fling),
    ("wheel", wheel),
];

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let wanted: Vec<String> = std::env::args().skip(1).collect();
    for (name, run) in SCENARIOS {
        if !wanted.is_empty() && !wanted.iter().any(|w| w == name) {
            continue;
        }
        let mut host = SimHost::reference(VIEWPORT_WIDTH)?.with_scroll_echo(true);
        log::info!("=== {} ===", name);
        report(&host, "start");
        run(&mut host);
        let settled = host.run_until_idle(SETTLE_BUDGET_MS);
        report(&host, if settled { "settled" } else { "still moving" });
        if !settled {
            anyhow::bail!("scenario `{}` did not settle", name);
        }
    }
    Ok(())
}

fn report(host: &SimHost, label: &str) {
    let c = host.carousel();
    log::info!(
        "{:>12} t={:>7.1}ms offset={:>8.1} active={:>3} ({}) phase={:?} frames={}",
        label,
        host.now_ms(),
        c.offset(),
        c.active_index(),
        c.active_effect().name,
        c.phase(),
        host.frames_run()
    );
}

// Press and release in place, then click the item two to the right.
fn tap(host: &mut SimHost) {
    let target = host.carousel().active_index() + 2;
    host.pointer_down(500.0);
    host.pointer_up();
    host.click(target);
    report(host, "clicked");
}

fn slow_drag(host: &mut SimHost) {
    host.pointer_down(600.0);
    for step in 1..=20 {
        host.pointer_move(600.0 - step as f64 * 10.0, 40.0);
    }
    host.advance(120.0);
    host.pointer_up();
    report(host, "released");
}

fn fling(host: &mut SimHost) {
    host.pointer_down(800.0);
    for step in 1..=6 {
        host.pointer_move(800.0 - step as f64 * 30.0, 16.0);
    }
    host.pointer_up();
    report(host, "released");
    while host.carousel().phase() == PhaseKind::Momentum {
        host.advance(100.0);
        report(host, "coasting");
    }
}

// Fast enough to cross a wrap boundary while coasting.
fn long_fling(host: &mut SimHost) {
    host.pointer_down(100.0);
    for step in 1..=10 {
        host.pointer_move(100.0 + step as f64 * 80.0, 16.0);
    }
    host.pointer_up();
    report(host, "released");
}

fn wheel(host: &mut SimHost) {
    for _ in 0..5 {
        host.wheel(37.0);
        host.advance(30.0);
    }
    report(host, "wheeled");
}
