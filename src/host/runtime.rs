use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use ratatui::crossterm::execute;
use tracing::{debug, warn};

use super::{ActionLog, HostControl, HostPage};

const INPUT_POLL: Duration = Duration::from_millis(50);
const FRAME_DELAY: Duration = Duration::from_millis(16);

/// Run the page in the terminal until the user quits and return the actions
/// it received.
pub fn run(mut page: HostPage) -> Result<ActionLog> {
	let mut terminal = ratatui::init();
	if let Err(err) = execute!(stdout(), EnableMouseCapture) {
		ratatui::restore();
		return Err(err.into());
	}
	if let Err(err) = terminal.clear() {
		restore_terminal();
		return Err(err.into());
	}

	let (event_tx, event_rx) = mpsc::channel();
	let input_running = Arc::new(AtomicBool::new(true));
	let input_flag = Arc::clone(&input_running);

	let input_thread = thread::spawn(move || -> Result<()> {
		while input_flag.load(Ordering::Relaxed) {
			if event::poll(INPUT_POLL)? {
				let event = event::read()?;
				if event_tx.send(event).is_err() {
					break;
				}
			}
		}
		Ok(())
	});

	let mut pending_events = VecDeque::new();

	let result: Result<()> = 'event_loop: loop {
		loop {
			match event_rx.try_recv() {
				Ok(Event::Resize(_, _)) => {}
				Ok(event) => pending_events.push_back(event),
				Err(mpsc::TryRecvError::Empty) => break,
				Err(mpsc::TryRecvError::Disconnected) => {
					break 'event_loop Err(anyhow!("input event channel disconnected"));
				}
			}
		}

		if let Err(err) = terminal.draw(|frame| page.draw(frame)) {
			break Err(err.into());
		}

		let mut exit = false;
		while let Some(event) = pending_events.pop_front() {
			if page.handle_event(&event) == HostControl::Exit {
				exit = true;
				break;
			}
		}
		if exit {
			debug!(actions = page.action_log().len(), "leaving event loop");
			break Ok(());
		}

		thread::sleep(FRAME_DELAY);
	};

	restore_terminal();

	input_running.store(false, Ordering::Relaxed);
	match input_thread.join() {
		Ok(join_result) => join_result?,
		Err(err) => std::panic::resume_unwind(err),
	}

	result.map(|()| page.into_action_log())
}

fn restore_terminal() {
	if let Err(err) = execute!(stdout(), DisableMouseCapture) {
		warn!(error = %err, "failed to disable mouse capture");
	}
	ratatui::restore();
}
