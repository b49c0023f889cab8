use super::*;
use crate::converter::testutil::test_resources;

mod properties;
