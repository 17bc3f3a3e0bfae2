use std::{ffi::CStr, sync::mpsc::Receiver};
use glfw::Context as _;
use thiserror::Error;
use crate::config::WindowConfig;

#[derive(Debug, Error)]
pub enum BootstrapError {
	#[error("GLFW initialisation failed: {0:?}")]
	Init(glfw::InitError),
	#[error("GLFW window creation failed")]
	WindowCreation,
	#[error("OpenGL function loading failed, {0} is unavailable")]
	Loader(&'static str)
}

/// Owns the GLFW instance, the window and its current OpenGL context.
pub struct Context {
	window: glfw::Window,
	events: Receiver<(f64, glfw::WindowEvent)>,
	glfw: glfw::Glfw,
	framebuffer_width: i32,
	framebuffer_height: i32
}

impl Context {
	pub fn new(config: &WindowConfig) -> Result<Self, BootstrapError> {
		let mut glfw = glfw::init(glfw::LOG_ERRORS).map_err(BootstrapError::Init)?;

		let (major, minor) = config.context_version;
		glfw.window_hint(glfw::WindowHint::ContextVersion(major, minor));
		glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
		glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
		glfw.window_hint(glfw::WindowHint::Visible(config.visible));

		let (mut window, events) = glfw.create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
			.ok_or(BootstrapError::WindowCreation)?;

		// Framebuffer can be larger than the window under display scaling
		let (framebuffer_width, framebuffer_height) = window.get_framebuffer_size();
		window.set_framebuffer_size_polling(true);
		window.set_close_polling(true);

		window.make_current();
		gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);

		// Returning drops the window, which destroys it
		check_loaded()?;

		unsafe {
			gl::Viewport(0, 0, framebuffer_width, framebuffer_height);
		}

		log::info!("Created {}x{} window, framebuffer {}x{}, OpenGL {}",
			config.width,
			config.height,
			framebuffer_width,
			framebuffer_height,
			gl_string(gl::VERSION).unwrap_or_else(|| String::from("unknown")));

		Ok(Self {
			window,
			events,
			glfw,
			framebuffer_width,
			framebuffer_height
		})
	}

	pub fn should_close(&self) -> bool {
		self.window.should_close()
	}

	/// Non-blocking. Keeps the viewport in sync with the framebuffer.
	pub fn poll_events(&mut self) {
		self.glfw.poll_events();

		for (_, event) in glfw::flush_messages(&self.events) {
			match event {
				glfw::WindowEvent::FramebufferSize(width, height) => {
					self.framebuffer_width = width;
					self.framebuffer_height = height;

					if width > 0 && height > 0 {
						unsafe { gl::Viewport(0, 0, width, height) };
					}

					log::debug!("Framebuffer resized to {}x{}", width, height);
				},
				glfw::WindowEvent::Close => log::info!("Window close requested"),
				_ => ()
			}
		}
	}

	pub fn minimized(&self) -> bool {
		self.framebuffer_width == 0 || self.framebuffer_height == 0
	}

	pub fn wait_events(&mut self) {
		self.glfw.wait_events();
	}

	pub fn framebuffer_size(&self) -> (i32, i32) {
		(self.framebuffer_width, self.framebuffer_height)
	}

	pub fn swap_buffers(&mut self) {
		self.window.swap_buffers();
	}
}

fn check_loaded() -> Result<(), BootstrapError> {
	let entry_points = [
		("glViewport", gl::Viewport::is_loaded()),
		("glClear", gl::Clear::is_loaded()),
		("glCreateProgram", gl::CreateProgram::is_loaded()),
		("glCreateShader", gl::CreateShader::is_loaded()),
		("glGenVertexArrays", gl::GenVertexArrays::is_loaded()),
		("glGenBuffers", gl::GenBuffers::is_loaded()),
		("glUniformMatrix4fv", gl::UniformMatrix4fv::is_loaded()),
		("glDrawArrays", gl::DrawArrays::is_loaded())
	];

	match entry_points.iter().find(|(_, loaded)| !loaded) {
		Some((name, _)) => Err(BootstrapError::Loader(*name)),
		None => Ok(())
	}
}

fn gl_string(name: gl::types::GLenum) -> Option<String> {
	unsafe {
		let ptr = gl::GetString(name);

		if ptr.is_null() {
			None
		}
		else {
			Some(CStr::from_ptr(ptr as *const _).to_string_lossy().into_owned())
		}
	}
}
