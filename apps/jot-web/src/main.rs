use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = jot_web::Args::parse();

	jot_web::run(args).await
}
