use past_due::Task;
use past_due::clock::SystemClock;

fn main() {
    env_logger::init();

    // A few tasks, to eyeball the overdue evaluation against the real clock
    let tasks = vec![
        Task::new("Water the plants".to_string(), Some("2021-03-20".to_string()), false),
        Task::new("File the 2020 taxes".to_string(), Some("2021-04-15".to_string()), true),
        Task::new("Renew the passport".to_string(), Some("2099-12-31".to_string()), false),
        Task::new("Call Mom".to_string(), None, false),
        Task::new("Fix the wobbly shelf".to_string(), Some("someday".to_string()), false),
    ];

    let clock = SystemClock;
    for task in &tasks {
        let overdue = if task.is_overdue(&clock) { "!" } else { " " };
        let completion = if task.completed() { "✓" } else { " " };
        println!("  {}{} {}\t(due: {})", completion, overdue, task.name(), task.due_date().unwrap_or("-"));
    }
}
