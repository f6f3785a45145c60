use std::time::Duration;
use tracing::{debug, info};

const WAITING_TIME: Duration = Duration::from_secs(60);

/// Print a greeting every minute until the process is stopped
pub async fn hello_world() {
    loop {
        let message = "Hello World!";
        println!("{}", message);
        info!("{}", message);
        debug!("Waiting {} seconds before running again...", WAITING_TIME.as_secs());
        tokio::time::sleep(WAITING_TIME).await;
    }
}
