use chain::{whitespace_normalizer, ReplacementChain};

fn main() {
    let ws = whitespace_normalizer();
    let submitted = "  Jane \t Doe \r\n ";
    println!("whitespace: {:?}", ws.normalize(Some(submitted)));

    let phone = ReplacementChain::from_pairs([
        (r"[^\d+]", ""),
        (r"^00", "+"),
    ])
    .expect("phone chain");
    println!("phone: {:?}", phone.normalize(Some("00 44 (20) 7946-0958")));

    println!("absent: {:?}", ws.normalize(None));
}
