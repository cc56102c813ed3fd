use crate::card::{CardDescriptor, DetailMedia};

/// Rendering surface contract. The core only ever asks for these five
/// things; what the surface does with them (terminal, DOM, test recorder)
/// is its own business.
pub trait GalleryView {
    fn render_cards(&mut self, cards: &[CardDescriptor]);
    fn show_detail(&mut self, card: &CardDescriptor);
    fn show_error(&mut self, message: &str);
    fn show_loading(&mut self, loading: bool);
    fn show_fact(&mut self, _fact: &str) {}
}

/// Terminal renderer shipped with the CLI front-end.
pub struct ConsoleView;

impl GalleryView for ConsoleView {
    fn render_cards(&mut self, cards: &[CardDescriptor]) {
        println!();
        for (i, card) in cards.iter().enumerate() {
            println!("[{}] {}  {}", i + 1, card.date_label, card.title);
            println!("    {}", card.thumbnail);
        }
        println!();
    }

    fn show_detail(&mut self, card: &CardDescriptor) {
        println!();
        println!("{} ({})", card.title, card.date_label);
        match &card.detail {
            DetailMedia::Image { url } => println!("image: {url}"),
            DetailMedia::Video { url } => println!("video: {url}"),
            DetailMedia::Unavailable => println!("media not available"),
        }
        println!("{}", card.explanation);
        println!();
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("error: {message}");
    }

    fn show_loading(&mut self, loading: bool) {
        if loading {
            println!("loading...");
        }
    }

    fn show_fact(&mut self, fact: &str) {
        println!("did you know? {fact}");
    }
}
