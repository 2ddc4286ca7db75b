//! Integration-style tests exercising the public generator API


mod batch_tests;
