//! A walkthrough of encoding, corrupting, and decoding a single block.

use rand::Rng;
use rscodec::RsContext;

const DATA_SIZE: usize = 12;
const ECC_SIZE: usize = 8;
const BLOCK_SIZE: usize = DATA_SIZE + ECC_SIZE;

fn hex(xs: &[u8]) -> String {
    xs.iter().map(|x| format!("{:02x}", x)).collect()
}

fn main() {
    let orig_message = b"Hello World!";
    assert_eq!(orig_message.len(), DATA_SIZE);

    println!("testing rs({:?})", String::from_utf8_lossy(orig_message));
    println!(
        "dimension = ({}, {}), corrects up to {} errors",
        BLOCK_SIZE,
        DATA_SIZE,
        ECC_SIZE / 2
    );

    let mut context = RsContext::new(ECC_SIZE);

    let mut codeword = [0u8; BLOCK_SIZE];
    codeword[..DATA_SIZE].copy_from_slice(orig_message);
    let mut parity = [0u8; ECC_SIZE];
    context.encode(orig_message, &mut parity);
    codeword[DATA_SIZE..].copy_from_slice(&parity);
    println!(
        "{:<19} => {:<31} {}",
        "encode",
        format!("{:?}", String::from_utf8_lossy(&codeword)),
        hex(&codeword)
    );

    // corrupt up to ECC_SIZE/2 symbols at unknown locations
    let mut rng = rand::thread_rng();
    let errors = rand::seq::index::sample(&mut rng, BLOCK_SIZE, ECC_SIZE / 2).into_vec();
    for &error in &errors {
        codeword[error] = rng.gen();
    }
    println!(
        "{:<19} => {:<31} {}",
        format!("corrupted ({})", ECC_SIZE / 2),
        format!("{:?}", String::from_utf8_lossy(&codeword)),
        hex(&codeword)
    );

    let corrected = context.decode(&mut codeword).expect("within correction capacity");
    println!(
        "{:<19} => {:<31} {}",
        "decode",
        format!("{:?}", String::from_utf8_lossy(&codeword)),
        hex(&codeword)
    );
    assert_eq!(corrected, ECC_SIZE / 2);
    assert_eq!(&codeword[..DATA_SIZE], orig_message);

    println!();
}
