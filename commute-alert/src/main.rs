use chrono::Utc;
use tracing_subscriber::EnvFilter;

use commute_alert::config::AppConfig;
use commute_alert::feed::{FeedClient, extract_arrivals};
use commute_alert::notify::{NotificationScheduler, PushoverClient, ScheduleOutcome};
use commute_alert::planner::{leave_by, select_arrival};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return;
        }
    };

    let client = match FeedClient::new(config.feed.clone()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create feed client: {e}");
            return;
        }
    };

    // Feed failures are fatal: nothing downstream works without a feed.
    let feed = match client.fetch().await {
        Ok(feed) => feed,
        Err(e) => {
            eprintln!("Failed to fetch feed: {e}");
            return;
        }
    };

    let arrivals = extract_arrivals(&feed, &config.route, &config.stop, config.tz);

    println!(
        "Upcoming {} train arrivals at stop {}:",
        config.route, config.stop
    );
    for arrival in &arrivals {
        println!("  {}", arrival.format("%I:%M:%S %p"));
    }

    let now = Utc::now().with_timezone(&config.tz);

    let Some(selected) = select_arrival(&arrivals, &config.window, now) else {
        println!("No qualifying arrival near {} today.", config.window);
        return;
    };

    let leave = leave_by(selected, config.walk_minutes);

    println!("Selected arrival: {}", selected.format("%I:%M:%S %p"));
    println!(
        "Leave by {} ({} min walk).",
        leave.format("%I:%M %p"),
        config.walk_minutes
    );

    let Some(pushover) = config.pushover else {
        eprintln!("PUSHOVER_USER not set; skipping notifications.");
        return;
    };

    let notifier = match PushoverClient::new(pushover) {
        Ok(notifier) => notifier,
        Err(e) => {
            eprintln!("Failed to create notification client: {e}");
            return;
        }
    };

    let scheduler = NotificationScheduler::new(notifier);
    let tz = config.tz;

    match scheduler.run(leave, move || Utc::now().with_timezone(&tz)).await {
        ScheduleOutcome::LeftNotified => println!("Reminder sent. Go catch your train."),
        ScheduleOutcome::Expired => println!("Leave-by time already passed; no reminder sent."),
    }
}
