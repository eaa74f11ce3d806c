partial_dto! {
    /// Creation payload for a copywrite. It declares no fields yet.
    pub struct CreateCopywriteDto =>
    /// [`CreateCopywriteDto`] with every field optional.
    UpdateCopywriteDto {}
}
