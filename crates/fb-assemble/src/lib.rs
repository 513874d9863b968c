//! Newsletter assembly.
//!
//! The content generator emits one raw file with four delimited blocks:
//!
//! ```text
//! <!--ISSUE_INFO-->...<!--/ISSUE_INFO-->
//! <!--TICKER-->...<!--/TICKER-->
//! <!--SECTIONS-->...<!--/SECTIONS-->
//! <!--FOOTER_EXCEPT-->...<!--/FOOTER_EXCEPT-->
//! ```
//!
//! [`Assembler`] extracts the blocks, expands their shorthand tags through a
//! [`fb_markup::Pipeline`] and substitutes them into the newsletter template.

mod assembler;
mod block;

pub use assembler::{AssembleError, Assembled, Assembler};
pub use block::{BLOCKS, Block, extract_block, strip_code_fences};
