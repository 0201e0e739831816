like_toggle::start!();
