#![cfg(test)]

use crate::dict::PinyinTable;
use crate::resources::Resources;

pub(crate) const TEST_DICT: &str = "\
4E2D=>zhōng
56FD=>guó
5F20=>zhāng
8BDA=>chéng
6211=>wǒ
4EEC=>men
7EFF=>lǜ
7684=>de
";

pub(crate) fn test_resources() -> Resources {
    let table: PinyinTable = TEST_DICT.parse().expect("test dictionary must parse");
    Resources::new(table)
}
