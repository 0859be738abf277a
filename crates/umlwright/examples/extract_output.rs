//! Example: Recovering a recommendation and diagram from generated output
//!
//! This example feeds a few differently shaped generation results through
//! the pipeline and prints what was recovered from each.

use serde_json::json;

use umlwright::{DiagramKind, DiagramPipeline, config::AppConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = DiagramPipeline::new(AppConfig::default());

    let results = [
        // Per-step outputs in order
        json!({"tasks_output": [
            "Agile Scrum: requirements will evolve with user feedback.",
            "```mermaid\nflowchart TD\n    User --> Checkout\n```",
        ]}),
        // Sub-results with an output each, the diagram in source notation
        json!({"tasks": [
            {"output": "Waterfall: the scope is fixed by contract."},
            {"output": "@startuml\nparticipant Client\nparticipant Server\nClient->Server: request\n@enduml"},
        ]}),
        // Nothing but free text
        json!(
            "After review, my SDLC recommendation: Spiral\n- high technical risk\n- staged funding\n\n\
             stateDiagram-v2\n    [*] --> Draft\n    Draft --> Review"
        ),
    ];

    for raw in &results {
        let outcome = pipeline.process(raw, Some(DiagramKind::Sequence));
        println!("{}\n", serde_json::to_string_pretty(&outcome)?);
    }

    Ok(())
}
