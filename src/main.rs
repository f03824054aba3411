use std::sync::Arc;

use termline::infrastructure::input::InputReader;
use termline::infrastructure::io::{InterceptedWriter, LineQueue};
use termline::infrastructure::loops::PollLoop;
use termline::infrastructure::term::TerminalModeController;
use termline::interface_adapter::controller::PromptController;
use termline::interface_adapter::port::{ByteSink, LineConsumer};
use termline::shared::logging;
use termline::usecase::LoopRegistry;

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut mode = TerminalModeController::enter()?;
    let size = mode.size();
    log::info!("terminal size {}x{}", size.cols, size.rows);

    let registry = Arc::new(LoopRegistry::new());
    let lines = LineQueue::new();

    // Submitted lines go to the queue; the executor thread picks them up.
    let producer = lines.clone();
    let consumer: LineConsumer = Box::new(move |line: &str| {
        producer.push(line.to_string());
        Ok(())
    });
    let prompt = PromptController::new(Box::new(std::io::stdout()), Some(consumer), "poll-loop");
    prompt.draw()?;

    // Stand-in for a hosted program: echo each line through the
    // interceptor so output never clobbers the prompt block.
    let mut echo = InterceptedWriter::new(prompt.clone(), "stdout");
    let completion_prompt = prompt.clone();
    let executor_lines = lines.clone();
    std::thread::Builder::new()
        .name("termline-exec".to_string())
        .spawn(move || {
            while let Some(line) = executor_lines.read_line() {
                let result = match line.as_str() {
                    "demo-complete" => completion_prompt
                        .show_completions(DEMO_COMPLETIONS.iter().map(|s| s.to_string()))
                        .map_err(anyhow::Error::from),
                    "demo-hide" => completion_prompt
                        .hide_completions()
                        .map_err(anyhow::Error::from),
                    _ => echo
                        .write_all(format!("you typed: {line}\n").as_bytes())
                        .map_err(anyhow::Error::from),
                };
                if let Err(err) = result {
                    log::error!("executor failed on {line:?}: {err:#}");
                }
            }
        })?;

    let poll_loop = PollLoop::new();
    registry.add_loop(Box::new(poll_loop.handle()));

    // Keys arrive on the reader thread and are handed to the loop, so
    // prompt mutations happen on the loop thread.
    let key_registry = Arc::clone(&registry);
    let key_prompt = prompt.clone();
    let stopper = poll_loop.handle();
    let _input = InputReader::spawn(
        std::io::stdin(),
        Box::new(move |token: &str| {
            if token == "ctrl+d" {
                stopper.shutdown();
                return Ok(());
            }
            let prompt = key_prompt.clone();
            let token = token.to_string();
            key_registry.call_in_loops(Arc::new(move || {
                prompt.on_key(&token)?;
                Ok(())
            }));
            Ok(())
        }),
    )?;

    poll_loop.run();

    prompt.clear()?;
    mode.restore();
    Ok(())
}

const DEMO_COMPLETIONS: &[&str] = &[
    "demo-complete",
    "demo-hide",
    "help",
    "history",
    "quit",
    "status",
    "version",
];
