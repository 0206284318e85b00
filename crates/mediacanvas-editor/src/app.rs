use tokio::sync::mpsc::UnboundedSender;

use mediacanvas_core::clip::ClipId;
use mediacanvas_core::clock::{PlaybackClock, TickOutcome};
use mediacanvas_core::config::EditorConfig;
use mediacanvas_core::error::Result;
use mediacanvas_core::geometry::{self, SizeField};
use mediacanvas_core::media::{MediaFile, MediaKind, ObjectUrls};
use mediacanvas_core::store::ClipStore;
use mediacanvas_core::timeline::{self, TimelinePosition};
use mediacanvas_media::{classify, ingest, probe};

use crate::interaction::InteractionController;
use crate::message::{Message, PointerTarget};
use crate::scene::{DisplayOptions, Scene};
use crate::sidebar::{self, SidebarForm};
use crate::ticker::Ticker;

/// One editing session: the clip collection, the playback clock, and the
/// transient UI state that drives them.
///
/// All mutation goes through [`Editor::update`].
pub struct Editor {
    pub config: EditorConfig,
    pub store: ClipStore,
    pub clock: PlaybackClock,
    pub interaction: InteractionController,
    pub sidebar: SidebarForm,
    pub display: DisplayOptions,
    pub status_message: String,
    sender: Option<UnboundedSender<Message>>,
    pub(crate) ticker: Option<Ticker>,
    disposed: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// A session without a message channel. Image probes run inline and
    /// ticks must be delivered by the caller.
    pub fn new(config: EditorConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid editor config: {config:?}");
        Self {
            store: ClipStore::new(ObjectUrls::new(), config.form_min_size),
            clock: PlaybackClock::new(),
            interaction: InteractionController::new(config.canvas_min_size),
            sidebar: SidebarForm::new(),
            display: DisplayOptions::default(),
            status_message: String::new(),
            sender: None,
            ticker: None,
            disposed: false,
            config,
        }
    }

    /// Like [`Editor::new`], but rejects a config that fails
    /// [`EditorConfig::validate`].
    pub fn try_new(config: EditorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// A session whose background work (image probes, playback ticks) posts
    /// messages into `sender`. Must be used from within a tokio runtime.
    pub fn with_channel(config: EditorConfig, sender: UnboundedSender<Message>) -> Self {
        let mut editor = Self::new(config);
        editor.sender = Some(sender);
        editor
    }

    pub fn update(&mut self, message: Message) {
        if self.disposed {
            tracing::debug!(?message, "editor disposed, ignoring message");
            return;
        }
        match message {
            Message::FilesDropped(files) => {
                for file in files {
                    self.ingest(file);
                }
            }
            Message::ImageProbed { file, result } => match result {
                Ok(natural) => {
                    let size = ingest::initial_size(MediaKind::Image, Some(natural), &self.config);
                    self.add_clip(file, MediaKind::Image, size);
                }
                Err(e) => {
                    tracing::warn!(file = %file.name, error = %e, "image probe failed");
                    self.status_message = format!("Could not read {}: {e}", file.name);
                }
            },
            Message::SelectClip(id) => self.select(id),
            Message::DeleteClip(id) => self.delete(id),
            Message::DeleteSelected => {
                if let Some(id) = self.store.selected().map(|c| c.id) {
                    self.delete(id);
                }
            }
            Message::PointerDown { target, at } => {
                let before = self.selected_id();
                if let PointerTarget::ResizeHandle(..) = target {
                    // The handle changes the size the sidebar ratio was taken from.
                    self.sidebar.end_editing();
                }
                if let Err(e) = self.interaction.pointer_down(&mut self.store, target, at) {
                    tracing::debug!(error = %e, "pointer down ignored");
                }
                if self.selected_id() != before {
                    self.sidebar.end_editing();
                }
            }
            Message::PointerMoved(at) => {
                if let Err(e) = self.interaction.pointer_move(&mut self.store, at) {
                    tracing::debug!(error = %e, "gesture abandoned");
                }
            }
            Message::PointerUp => self.interaction.pointer_up(),
            Message::WidthInput(text) => self.edit_size(SizeField::Width, &text),
            Message::HeightInput(text) => self.edit_size(SizeField::Height, &text),
            Message::StartInput(text) => self.edit_window(&text, timeline::edit_start),
            Message::EndInput(text) => self.edit_window(&text, timeline::edit_end),
            Message::SetAspectLock(locked) => self.sidebar.set_lock_aspect(locked),
            Message::OpacityChanged(opacity) => self.display.opacity = opacity.min(100),
            Message::RotationInput(text) => match sidebar::parse_degrees(&text) {
                Some(degrees) => self.display.rotation_degrees = degrees,
                None => tracing::debug!(input = %text, "rotation input ignored"),
            },
            Message::SetRoundCorners(on) => self.display.round_corners = on,
            Message::Play => self.play(),
            Message::Pause => self.pause(),
            Message::TogglePlayback => {
                if self.clock.is_running() {
                    self.pause();
                } else {
                    self.play();
                }
            }
            Message::SeekTo(to) => {
                let at = self.clock.seek(to);
                self.store.recompute_visibility(at);
            }
            Message::Tick { generation } => self.tick(generation),
            Message::Dispose => self.dispose(),
        }
    }

    fn ingest(&mut self, file: MediaFile) {
        let kind = match classify::classify(&file) {
            Ok(kind) => kind,
            Err(e) => {
                tracing::debug!(error = %e, "file rejected");
                self.status_message = e.to_string();
                return;
            }
        };
        match kind {
            MediaKind::Video => {
                let size = ingest::initial_size(MediaKind::Video, None, &self.config);
                self.add_clip(file, kind, size);
            }
            MediaKind::Image => match &self.sender {
                Some(sender) => {
                    let sender = sender.clone();
                    tracing::debug!(file = %file.name, "probing image in background");
                    tokio::task::spawn_blocking(move || {
                        let result = probe::natural_size(&file.path).map_err(|e| e.to_string());
                        let _ = sender.send(Message::ImageProbed { file, result });
                    });
                }
                None => {
                    let result = probe::natural_size(&file.path).map_err(|e| e.to_string());
                    self.update(Message::ImageProbed { file, result });
                }
            },
        }
    }

    fn add_clip(&mut self, file: MediaFile, kind: MediaKind, size: geometry::Size) {
        let name = file.name.clone();
        let added = ingest::build_clip(file, kind, size, self.store.urls(), &self.config)
            .and_then(|clip| self.store.add(clip));
        match added {
            Ok(_) => {
                self.sidebar.end_editing();
                self.status_message = format!("Added: {name}");
            }
            Err(e) => {
                tracing::debug!(error = %e, "clip not added");
                self.status_message = format!("Add failed: {e}");
            }
        }
    }

    fn select(&mut self, id: ClipId) {
        if self.selected_id() == Some(id) {
            return;
        }
        match self.store.select(id) {
            Ok(()) => self.sidebar.end_editing(),
            Err(e) => tracing::debug!(error = %e, "select ignored"),
        }
    }

    fn delete(&mut self, id: ClipId) {
        self.interaction.forget(id);
        match self.store.delete(id) {
            Ok(()) => {
                self.sidebar.end_editing();
                self.status_message = "Clip deleted".into();
            }
            Err(e) => tracing::debug!(error = %e, "delete ignored"),
        }
    }

    fn edit_size(&mut self, field: SizeField, text: &str) {
        let Some(value) = sidebar::parse_number(text) else {
            tracing::debug!(input = %text, "size input ignored");
            return;
        };
        let Some(clip) = self.store.selected() else {
            return;
        };
        let id = clip.id;
        let aspect = self.sidebar.aspect_for(clip);
        let size = geometry::apply_size_field(clip.size, field, value, aspect, self.config.form_bounds());
        if let Err(e) = self.store.update_size(id, size) {
            tracing::debug!(error = %e, "size edit ignored");
        }
    }

    fn edit_window(&mut self, text: &str, edit: fn(timeline::TimeWindow, f64) -> timeline::TimeWindow) {
        let Some(secs) = sidebar::parse_number(text) else {
            tracing::debug!(input = %text, "time input ignored");
            return;
        };
        let Some(clip) = self.store.selected() else {
            return;
        };
        let id = clip.id;
        let window = edit(clip.window, secs);
        if let Err(e) = self.store.update_time_window(id, window) {
            tracing::debug!(error = %e, "time edit ignored");
        }
    }

    fn play(&mut self) {
        let Some(generation) = self.clock.play() else {
            return;
        };
        self.store.recompute_visibility(self.clock.current());
        self.stop_ticker();
        match &self.sender {
            Some(sender) => {
                self.ticker = Some(Ticker::spawn(self.config.tick_interval(), generation, sender.clone()));
            }
            None => tracing::debug!(generation, "no message channel, ticks are delivered externally"),
        }
    }

    fn pause(&mut self) {
        if self.clock.pause() {
            self.stop_ticker();
        }
    }

    fn tick(&mut self, generation: u64) {
        match self.clock.tick(generation) {
            TickOutcome::Stale => tracing::debug!(generation, "stale tick ignored"),
            TickOutcome::Advanced(at) => self.store.recompute_visibility(at),
            TickOutcome::Finished => {
                self.stop_ticker();
                self.store.recompute_visibility(TimelinePosition::zero());
            }
        }
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    /// End the session: stop playback, abandon any gesture, and release
    /// every display URL. Later messages are ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.stop_ticker();
        self.clock.pause();
        self.interaction.pointer_up();
        self.store.teardown();
        self.disposed = true;
        tracing::info!("editor disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn scene(&self) -> Scene {
        Scene::build(&self.store, &self.clock, &self.display, &self.sidebar)
    }

    pub fn urls(&self) -> &ObjectUrls {
        self.store.urls()
    }

    fn selected_id(&self) -> Option<ClipId> {
        self.store.selected().map(|c| c.id)
    }
}
