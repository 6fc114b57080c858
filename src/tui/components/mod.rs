//! # TUI Components
//!
//! All components are stateless and props-based: the caller derives every
//! prop from `App`/`TuiState` each frame and the component only draws.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── title_bar.rs  (Heading + status line)
//! ├── detail.rs     (Selected template, or the selection prompt)
//! └── filmstrip.rs  (Thumbnail strip, navigation controls, hit-testing)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod detail;
pub use detail::DetailPanel;
pub mod filmstrip;
pub use filmstrip::{Filmstrip, StripHit, StripLayout};
