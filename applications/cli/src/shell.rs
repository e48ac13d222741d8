//! Interactive player shell
//!
//! One command per line. The event loop handles user input, media events and
//! clock ticks strictly one at a time; queued media events always go before
//! the next line of input, so a play request settles before the following
//! command runs.

use crate::error::{CliError, Result};
use crate::media::SimulatedMedia;
use crate::render::Renderer;
use cadence_core::{Notification, PlaylistId};
use cadence_manifest::PlaylistStore;
use cadence_playback::{MediaEvent, PlaybackError, Transport};
use std::io::Write;
use std::str::FromStr;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, warn};

pub const HELP: &str = "\
Commands:
  play [N]      play song N, or resume
  pause         pause playback
  toggle        play or pause
  next | prev   skip forward or back
  shuffle       toggle shuffle
  repeat        toggle repeat
  seek PCT      jump to PCT percent of the song
  vol N         set volume (0-100)
  mute          toggle mute
  switch ID     change playlist
  list          show the current playlist
  playlists     show every playlist
  status        show what is playing
  wait SECS     let the clock run
  quit          leave";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Play a 0-based index, or resume
    Play(Option<usize>),
    Pause,
    Toggle,
    Next,
    Previous,
    Shuffle,
    Repeat,
    /// Percent of the current track
    Seek(f64),
    Volume(u8),
    Mute,
    Switch(PlaylistId),
    List,
    Playlists,
    Status,
    Wait(Duration),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let name = words
            .next()
            .ok_or_else(|| CliError::Command("empty line".to_string()))?
            .to_ascii_lowercase();
        let arg = words.next();
        if words.next().is_some() {
            return Err(CliError::Command(format!("too many arguments to {}", name)));
        }

        let command = match (name.as_str(), arg) {
            ("play", arg) => Command::Play(arg.map(parse_song_number).transpose()?),
            ("pause", None) => Command::Pause,
            ("toggle", None) => Command::Toggle,
            ("next", None) => Command::Next,
            ("prev" | "previous", None) => Command::Previous,
            ("shuffle", None) => Command::Shuffle,
            ("repeat", None) => Command::Repeat,
            ("seek", Some(arg)) => Command::Seek(parse_percent(arg)?),
            ("vol" | "volume", Some(arg)) => Command::Volume(parse_volume(arg)?),
            ("mute", None) => Command::Mute,
            ("switch", Some(arg)) => Command::Switch(PlaylistId::new(arg)),
            ("list", None) => Command::List,
            ("playlists", None) => Command::Playlists,
            ("status", None) => Command::Status,
            ("wait", Some(arg)) => Command::Wait(parse_seconds(arg)?),
            ("help" | "?", None) => Command::Help,
            ("quit" | "exit", None) => Command::Quit,
            ("seek" | "vol" | "volume" | "switch" | "wait", None) => {
                return Err(CliError::Command(format!("{} needs an argument", name)));
            }
            (
                "pause" | "toggle" | "next" | "prev" | "previous" | "shuffle" | "repeat" | "mute"
                | "list" | "playlists" | "status" | "help" | "?" | "quit" | "exit",
                Some(_),
            ) => {
                return Err(CliError::Command(format!("{} takes no argument", name)));
            }
            _ => {
                return Err(CliError::Command(format!(
                    "unknown command \"{}\" (try help)",
                    name
                )));
            }
        };
        Ok(command)
    }
}

/// 1-based song number to index
fn parse_song_number(arg: &str) -> Result<usize> {
    match arg.parse::<usize>() {
        Ok(0) => Err(CliError::Command("song numbers start at 1".to_string())),
        Ok(n) => Ok(n - 1),
        Err(_) => Err(CliError::Command(format!("not a song number: {}", arg))),
    }
}

fn parse_percent(arg: &str) -> Result<f64> {
    arg.trim_end_matches('%')
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| CliError::Command(format!("not a percentage: {}", arg)))
}

fn parse_volume(arg: &str) -> Result<u8> {
    arg.parse::<u8>()
        .ok()
        .filter(|level| *level <= 100)
        .ok_or_else(|| CliError::Command(format!("volume must be 0-100, got {}", arg)))
}

fn parse_seconds(arg: &str) -> Result<Duration> {
    arg.parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .map(Duration::from_secs_f64)
        .ok_or_else(|| CliError::Command(format!("not a number of seconds: {}", arg)))
}

/// What the loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Stop reading input for a while
    Wait(Duration),
    Quit,
}

/// Player front-end state
pub struct Shell<W: Write> {
    transport: Transport<SimulatedMedia>,
    store: PlaylistStore,
    renderer: Renderer<W>,
}

impl<W: Write> Shell<W> {
    pub fn new(store: PlaylistStore, transport: Transport<SimulatedMedia>, out: W) -> Self {
        Self {
            transport,
            store,
            renderer: Renderer::new(out),
        }
    }

    /// Make `id` the active playlist and show its songs
    ///
    /// Unknown ids select an empty playlist.
    pub fn switch(&mut self, id: &PlaylistId) -> Result<()> {
        if self.store.get(id).is_none() {
            warn!(playlist = %id, "Unknown playlist");
        }

        let playlist = self.store.switch(id);
        self.renderer.song_list(&playlist, None)?;
        self.transport.select_playlist(playlist);
        self.flush()
    }

    pub fn notify(&mut self, notification: &Notification) -> Result<()> {
        self.renderer.notification(notification)?;
        Ok(())
    }

    /// Parse and run one line of input
    ///
    /// Blank lines and `#` comments are skipped. Bad commands are reported,
    /// never fatal.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(err) => {
                self.renderer.error(&err)?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "Executing");

        match command {
            Command::Play(index) => {
                if let Err(PlaybackError::IndexOutOfRange { index, len }) =
                    self.transport.play(index)
                {
                    self.renderer.error(format!(
                        "There is no song {} in this playlist ({} songs)",
                        index + 1,
                        len
                    ))?;
                }
            }
            Command::Pause => self.transport.pause(),
            Command::Toggle => self.transport.toggle(),
            Command::Next => self.transport.next(),
            Command::Previous => self.transport.previous(),
            Command::Shuffle => self.transport.toggle_shuffle(),
            Command::Repeat => self.transport.toggle_repeat(),
            Command::Seek(percent) => self.transport.seek(percent),
            Command::Volume(level) => self.transport.set_volume(level),
            Command::Mute => self.transport.toggle_mute(),
            Command::Switch(id) => self.switch(&id)?,
            Command::List => {
                let session = self.transport.session();
                match session.playlist() {
                    Some(playlist) => {
                        self.renderer.song_list(playlist, session.current_index())?;
                    }
                    None => self.renderer.library(&self.store)?,
                }
            }
            Command::Playlists => self.renderer.library(&self.store)?,
            Command::Status => self.renderer.status(
                self.transport.session(),
                &self.transport.progress(),
                self.transport.volume(),
                self.transport.is_muted(),
            )?,
            Command::Wait(duration) => return Ok(Flow::Wait(duration)),
            Command::Help => self.renderer.line(HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        self.flush()?;
        Ok(Flow::Continue)
    }

    /// Feed a media event to the transport
    pub fn handle_media(&mut self, event: MediaEvent) -> Result<()> {
        self.transport.handle_event(event);
        self.flush()
    }

    /// Run the media clock
    pub fn tick(&mut self, elapsed: Duration) {
        self.transport.media_mut().advance(elapsed);
    }

    pub fn transport(&self) -> &Transport<SimulatedMedia> {
        &self.transport
    }

    /// Consume the shell and return its output
    pub fn into_output(self) -> W {
        self.renderer.into_inner()
    }

    fn flush(&mut self) -> Result<()> {
        for event in self.transport.drain_events() {
            self.renderer.event(&event, self.transport.session())?;
        }
        Ok(())
    }
}

/// Drive `shell` until `quit` or the end of `input`
///
/// Media events still queued when input ends are handled before returning.
pub async fn run<W, R>(
    mut shell: Shell<W>,
    input: R,
    mut media_events: UnboundedReceiver<MediaEvent>,
    tick: Duration,
) -> Result<Shell<W>>
where
    W: Write,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut resume_at: Option<Instant> = None;

    loop {
        tokio::select! {
            biased;

            Some(event) = media_events.recv() => shell.handle_media(event)?,

            _ = ticker.tick() => shell.tick(tick),

            () = tokio::time::sleep_until(resume_at.unwrap_or_else(Instant::now)), if resume_at.is_some() => {
                resume_at = None;
            }

            line = lines.next_line(), if resume_at.is_none() => {
                let Some(line) = line? else {
                    debug!("Input closed");
                    break;
                };
                match shell.execute_line(&line)? {
                    Flow::Continue => {}
                    Flow::Wait(duration) => resume_at = Some(Instant::now() + duration),
                    Flow::Quit => break,
                }
            }
        }
    }

    while let Ok(event) = media_events.try_recv() {
        shell.handle_media(event)?;
    }
    Ok(shell)
}
