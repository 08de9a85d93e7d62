use colored::{ColoredString, Colorize};
use std::fmt::Write as _;
use travelagent_core::pipeline::{NodeState, NodeStatus, PipelineStage};
use travelagent_engine::session::RequestSession;

fn dot(status: &NodeStatus) -> ColoredString {
    match status.state {
        NodeState::Idle | NodeState::Skipped => "●".bright_black(),
        NodeState::Running => "●".yellow(),
        NodeState::Done => "●".green(),
        NodeState::Error => "●".red(),
    }
}

pub fn render_pipeline(session: &RequestSession) -> String {
    let mut out = String::new();
    for stage in PipelineStage::ALL {
        let status = session.stage_status(stage);
        let _ = writeln!(
            out,
            "  {} {:<14} {}",
            dot(&status),
            stage.title(),
            status.label.bright_black()
        );
    }
    out
}

pub fn render_response(session: &RequestSession) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Response".bold());
    let _ = writeln!(out, "{}", session.result_query_line);

    if session.show_inline_status {
        let _ = writeln!(out, "{} {}", "●".yellow(), session.inline_status_text);
    }
    if !session.result_answer.is_empty() {
        let _ = writeln!(out, "\n{}", session.result_answer);
    }

    if !session.flights.is_empty() {
        let _ = writeln!(out, "\n{}", "FLIGHTS".bright_black());
        for f in &session.flights {
            let _ = writeln!(out, "  {} {}", f.carrier.bold(), f.flight_number.bold());
            let _ = writeln!(out, "    Route: {}", f.route);
            let _ = writeln!(out, "    Depart: {}", f.depart_date);
            let _ = writeln!(out, "    Return: {}", f.return_date);
            let _ = writeln!(out, "    Price: {}", f.price_string());
        }
    }

    if !session.hotels.is_empty() {
        let _ = writeln!(out, "\n{}", "HOTELS".bright_black());
        for h in &session.hotels {
            let _ = writeln!(out, "  {}", h.name.bold());
            let _ = writeln!(out, "    City: {}", h.city);
            let _ = writeln!(out, "    Checkout: {}", h.checkout_date);
            let _ = writeln!(out, "    Price: {}", h.nightly_price_string());
        }
    }

    let _ = writeln!(out, "\n{}", session.status_line.bright_black());
    out
}
