use alloy::sol;

sol! {
   contract ERC20 {
        function balanceOf(address owner) public view returns (uint256);
   }
}
