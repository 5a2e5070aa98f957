//! SDL2 presentation surface and keyboard plumbing.
//!
//! The window owns a single streaming texture the size of the playfield.
//! Each frame the finished [`PixelBuffer`] is uploaded and stretched over the
//! whole window; nothing else is drawn on the GPU side.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;

use crate::error::{Error, Result};
use crate::input::{InputState, Key};
use crate::render::PixelBuffer;

/// Map a keycode to a game key.
fn map_key(keycode: Keycode) -> Option<Key> {
    match keycode {
        Keycode::Left | Keycode::A => Some(Key::Left),
        Keycode::Right | Keycode::D => Some(Key::Right),
        Keycode::Space => Some(Key::Fire),
        Keycode::Escape => Some(Key::Quit),
        _ => None,
    }
}

pub struct Window {
    // Declared before `_texture_creator` so it is dropped first.
    texture: sdl2::render::Texture<'static>,
    _texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    width: u32,
    height: u32,
}

impl Window {
    /// Open a window showing a `width` x `height` buffer at `scale`x, with
    /// presentation locked to vsync.
    pub fn new(title: &str, width: u32, height: u32, scale: u32) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(Error::Init)?;
        let video_subsystem = sdl_context.video().map_err(Error::Init)?;

        let window = video_subsystem
            .window(title, width * scale, height * scale)
            .position_centered()
            .build()
            .map_err(|e| Error::Window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .present_vsync()
            .build()
            .map_err(|e| Error::Window(e.to_string()))?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump().map_err(Error::Init)?;

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // `texture` is declared first, so it is dropped before texture_creator.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::RGBA8888, width, height)
            .map_err(|e| Error::Texture(e.to_string()))?;

        tracing::info!(width, height, scale, "window created");

        Ok(Self {
            texture,
            _texture_creator: texture_creator,
            canvas,
            event_pump,
            width,
            height,
        })
    }

    /// Drain pending events into `input`.
    ///
    /// Key repeats are ignored so a held key counts once in the accumulator.
    pub fn poll_events(&mut self, input: &mut InputState) {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => input.request_quit(),
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    if let Some(key) = map_key(keycode) {
                        input.key_down(key);
                    }
                }
                Event::KeyUp {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    if let Some(key) = map_key(keycode) {
                        input.key_up(key);
                    }
                }
                _ => {}
            }
        }
    }

    /// Upload `buffer` and show it.
    ///
    /// Buffer row 0 is the bottom of the playfield, so the copy is flipped
    /// vertically.
    pub fn present(&mut self, buffer: &PixelBuffer) -> Result<()> {
        debug_assert_eq!((buffer.width(), buffer.height()), (self.width, self.height));
        self.texture
            .update(None, buffer.as_bytes(), (self.width * 4) as usize)
            .map_err(|e| Error::Texture(e.to_string()))?;

        self.canvas.clear();
        self.canvas
            .copy_ex(&self.texture, None, None, 0.0, None, false, true)
            .map_err(Error::Present)?;
        self.canvas.present();
        Ok(())
    }
}
