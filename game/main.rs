use std::process;
use engine::{logging, opengl::Context, Config};

mod game;
use game::Game;

fn main() {
	logging::init_logging();

	let config = Config::default();

	let mut context = match Context::new(&config.window) {
		Ok(context) => context,
		Err(error) => {
			log::error!("{}", error);
			process::exit(1);
		}
	};

	let mut game = Game::new(&config);

	while !context.should_close() {
		context.poll_events();

		if context.minimized() {
			context.wait_events();
			continue;
		}

		game.update();
		game.render();

		context.swap_buffers();
	}

	// GPU objects go before the context that owns them
	drop(game);
	drop(context);

	log::info!("Window closed");
}
