mod favorite_item;
