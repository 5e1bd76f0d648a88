/// Output regions of the page, abstracted so the workflows can run against a
/// real frontend or a test double.
///
/// The story region and the image region are independent; the image section
/// visibility flag is shared between both workflows and last writer wins.
pub trait DisplayPort: Send + Sync {
    /// Overwrite the story region with status or result text.
    fn set_story_text(&self, text: &str);

    /// Overwrite the image region with status or failure text.
    fn set_image_text(&self, text: &str);

    /// Replace the image region's content with an image element rendering
    /// the given source (a `data:image/png;base64,...` URI).
    fn set_image_element(&self, src: &str);

    /// Empty the image region.
    fn clear_image(&self);

    /// Show or hide the image section container.
    fn set_image_section_visible(&self, visible: bool);

    /// Blocking, user-facing notification for correctable input problems.
    fn alert(&self, message: &str);
}
