use teloxide::prelude::*;
use teloxide::types::ChatMemberStatus;

/// Whether the user may run file-management commands in this chat.
///
/// Private chats have no member hierarchy, so they are always allowed. In
/// groups only administrators and the owner qualify; a failed lookup counts
/// as "not an admin".
pub async fn can_manage(bot: &Bot, msg: &Message) -> bool {
    if msg.chat.is_private() {
        return true;
    }
    let user = match msg.from() {
        Some(user) => user,
        None => return false,
    };
    match bot.get_chat_member(msg.chat.id, user.id).await {
        Ok(member) => matches!(
            member.status(),
            ChatMemberStatus::Administrator | ChatMemberStatus::Owner
        ),
        Err(_) => false,
    }
}
