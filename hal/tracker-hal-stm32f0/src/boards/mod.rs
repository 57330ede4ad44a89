//! Board definitions built on STM32F0 parts

pub mod arribada_v2;
