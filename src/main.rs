use iconforge::{IconConfig, IconRenderer, IconSpec, BROWSER_TOOL_HINT};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::default().add_directive(Level::INFO.into())),
        )
        .init();

    let renderer = IconRenderer::new(iconforge::default_graphics(), IconConfig::default());

    if let Some(reason) = renderer.unavailable_reason() {
        println!("{}", reason);
        println!();
        println!("{}", BROWSER_TOOL_HINT);
        return Ok(());
    }

    let mut all_created = true;
    for spec in IconSpec::defaults() {
        let result = renderer.render(&spec);
        match result.reason() {
            None => println!("Created {}", result.path().display()),
            Some(reason) => {
                all_created = false;
                println!("Cannot create {} - {}", result.path().display(), reason);
            }
        }
    }

    println!();
    if all_created {
        println!("All icons created successfully!");
    } else {
        println!("Some icons could not be created");
    }
    Ok(())
}
