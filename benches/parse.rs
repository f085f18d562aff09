#![feature(test)]
use std::collections::BTreeMap;

extern crate test;
use pdfcmap::CMap;

fn to_unicode_table() -> BTreeMap<u32, char> {
    (0..0x3000u32)
        .filter(|code| code % 7 != 0)
        .filter_map(|code| char::from_u32(0x4e00 + code).map(|ch| (code, ch)))
        .collect()
}

#[bench]
fn bench_parse(b: &mut test::test::Bencher) {
    let data = CMap::new_to_unicode_chars(&to_unicode_table()).to_bytes();

    b.iter(|| {
        CMap::parse(&data).unwrap();
    })
}

#[bench]
fn bench_decode(b: &mut test::test::Bencher) {
    let cmap = CMap::new_to_unicode_chars(&to_unicode_table());
    let text: Vec<u8> = (0..0x3000u16).flat_map(u16::to_be_bytes).collect();

    b.iter(|| cmap.charcode_bytes_to_unicode(&text))
}

#[bench]
fn bench_encode(b: &mut test::test::Bencher) {
    let cmap = CMap::new_to_unicode_chars(&to_unicode_table());

    b.iter(|| cmap.to_bytes())
}
