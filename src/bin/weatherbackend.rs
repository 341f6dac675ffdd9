use microservice_example::{app, Service};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    app::run(Service::Weather)?;
    Ok(())
}
